//! Common prefix/suffix locator

use crate::locator::{common_affixes, text_diff};
use crate::{DiffLocator, DiffOutcome, OffsetUnit, Segments};

/// Locates the difference as everything between the longest common prefix and
/// the longest common suffix.
///
/// The suffix is never allowed to overlap the prefix, so for `"aa" -> "a"` the
/// removed unit is the second one. Disjoint edits are swallowed into their
/// covering span; this locator never reports
/// [`DiffOutcome::NotCoalescible`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffixLocator;

impl DiffLocator for AffixLocator {
    fn locate(&self, old: &str, new: &str, unit: OffsetUnit) -> DiffOutcome {
        if old == new {
            return DiffOutcome::Identical;
        }

        let old_segments = Segments::new(old, unit);
        let new_segments = Segments::new(new, unit);
        let a = old_segments.pieces();
        let b = new_segments.pieces();

        let (prefix, suffix) = common_affixes(a, b);

        let diff = text_diff(
            &old_segments,
            &new_segments,
            (prefix, a.len() - suffix),
            (prefix, b.len() - suffix),
        );
        tracing::debug!(
            region = %diff.region,
            prefix,
            suffix,
            ?unit,
            "located affix diff"
        );
        DiffOutcome::Coalesced(diff)
    }
}
