//! The locator capability and strategy selection

use crate::{AffixLocator, DiffOutcome, DiffStrategy, MyersLocator, OffsetUnit, Segments, TextDiff};
use selection_remap::DiffRegion;

/// Finds the region in which two versions of a text differ.
///
/// Implementations must report [`DiffOutcome::Identical`] exactly when the two
/// texts are equal, and any [`DiffOutcome::Coalesced`] region must reproduce
/// `new` when spliced into `old`.
pub trait DiffLocator {
    /// Locate the difference between `old` and `new`, measured in `unit`.
    fn locate(&self, old: &str, new: &str, unit: OffsetUnit) -> DiffOutcome;
}

impl<L: DiffLocator + ?Sized> DiffLocator for Box<L> {
    fn locate(&self, old: &str, new: &str, unit: OffsetUnit) -> DiffOutcome {
        (**self).locate(old, new, unit)
    }
}

/// Build the locator a strategy names.
pub fn locator_for(strategy: DiffStrategy) -> Box<dyn DiffLocator + Send + Sync> {
    match strategy {
        DiffStrategy::Affix => Box::new(AffixLocator),
        DiffStrategy::Myers { coalesce_radius } => Box::new(MyersLocator::new(coalesce_radius)),
    }
}

/// Locate the difference with the common prefix/suffix strategy.
pub fn locate(old: &str, new: &str, unit: OffsetUnit) -> DiffOutcome {
    AffixLocator.locate(old, new, unit)
}

/// Lengths of the longest common prefix and the longest common suffix that
/// does not overlap it.
pub(crate) fn common_affixes<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (prefix, suffix)
}

/// Turn segment-index spans on both sides into a [`TextDiff`].
pub(crate) fn text_diff(
    old: &Segments<'_>,
    new: &Segments<'_>,
    old_span: (usize, usize),
    new_span: (usize, usize),
) -> TextDiff {
    debug_assert!(old_span.0 <= old_span.1 && new_span.0 <= new_span.1);
    let start = old.unit_offset(old_span.0);
    let removed_len = old.unit_offset(old_span.1) - start;
    let replacement_len = new.unit_offset(new_span.1) - new.unit_offset(new_span.0);
    let region = DiffRegion::with_len(start, removed_len, replacement_len);

    TextDiff {
        region,
        replacement: new.slice(new_span.0, new_span.1).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_for_strategy() {
        let affix = locator_for(DiffStrategy::Affix);
        let myers = locator_for(DiffStrategy::Myers { coalesce_radius: 1 });

        let old = "one two three";
        let new = "one 2 three";
        assert_eq!(
            affix.locate(old, new, OffsetUnit::Chars),
            myers.locate(old, new, OffsetUnit::Chars)
        );

        let new = "1 two 3";
        assert!(affix.locate(old, new, OffsetUnit::Chars).coalesced().is_some());
        assert_eq!(
            myers.locate(old, new, OffsetUnit::Chars),
            DiffOutcome::NotCoalescible { regions: 2 }
        );
    }

    #[test]
    fn test_common_affixes() {
        assert_eq!(common_affixes(b"abcxyz", b"abXyz"), (2, 2));
        assert_eq!(common_affixes(b"aa", b"a"), (1, 0));
        assert_eq!(common_affixes(b"", b"abc"), (0, 0));
        assert_eq!(common_affixes(b"same", b"same"), (4, 0));
    }

    #[test]
    fn test_text_diff_measures_in_units() {
        let old = Segments::new("a🦀c", OffsetUnit::Utf16);
        let new = Segments::new("aXYc", OffsetUnit::Utf16);
        let diff = text_diff(&old, &new, (1, 2), (1, 3));
        assert_eq!(diff.region, DiffRegion::new(1, 3, 2).unwrap());
        assert_eq!(diff.replacement, "XY");
        assert_eq!(diff.apply_to("a🦀c", OffsetUnit::Utf16), "aXYc");
    }

    #[test]
    fn test_locate_shorthand() {
        assert_eq!(locate("same", "same", OffsetUnit::Chars), DiffOutcome::Identical);
    }
}
