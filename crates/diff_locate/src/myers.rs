//! Myers diff locator that can tell disjoint edits apart

use crate::locator::{common_affixes, text_diff};
use crate::{DiffLocator, DiffOutcome, OffsetUnit, Segments, DEFAULT_COALESCE_RADIUS};
use similar::{capture_diff_slices, group_diff_ops, Algorithm, DiffTag};

/// Largest usable merge radius; grouping doubles it.
pub const MAX_COALESCE_RADIUS: usize = usize::MAX / 2;

/// Locates differences with a Myers diff over unit segments.
///
/// Changes separated by an unchanged run of at most `2 * coalesce_radius`
/// units are merged into one region. Anything further apart is reported as
/// [`DiffOutcome::NotCoalescible`] so the caller can reset the selection
/// instead of remapping through a region that does not describe the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyersLocator {
    coalesce_radius: usize,
}

impl MyersLocator {
    /// Create a locator with the given merge radius, capped at
    /// [`MAX_COALESCE_RADIUS`].
    pub fn new(coalesce_radius: usize) -> Self {
        Self {
            coalesce_radius: coalesce_radius.min(MAX_COALESCE_RADIUS),
        }
    }

    /// The merge radius.
    pub fn coalesce_radius(&self) -> usize {
        self.coalesce_radius
    }
}

impl Default for MyersLocator {
    fn default() -> Self {
        Self::new(DEFAULT_COALESCE_RADIUS)
    }
}

impl DiffLocator for MyersLocator {
    fn locate(&self, old: &str, new: &str, unit: OffsetUnit) -> DiffOutcome {
        if old == new {
            return DiffOutcome::Identical;
        }

        let old_segments = Segments::new(old, unit);
        let new_segments = Segments::new(new, unit);
        let a = old_segments.pieces();
        let b = new_segments.pieces();

        // Myers runs on the middle only; op indices are relative to `prefix`.
        let (prefix, suffix) = common_affixes(a, b);
        let old_middle = &a[prefix..a.len() - suffix];
        let new_middle = &b[prefix..b.len() - suffix];
        let ops = capture_diff_slices(Algorithm::Myers, old_middle, new_middle);
        tracing::trace!(
            old_segments = a.len(),
            new_segments = b.len(),
            prefix,
            suffix,
            ops = ops.len(),
            "computed myers diff"
        );

        let groups = group_diff_ops(ops, self.coalesce_radius);
        if groups.len() > 1 {
            tracing::debug!(
                regions = groups.len(),
                radius = self.coalesce_radius,
                "difference does not coalesce into one region"
            );
            return DiffOutcome::NotCoalescible {
                regions: groups.len(),
            };
        }

        // The new-side indices of trailing deletes can lag behind the last
        // equal run, so only the old-side hull is read from the ops.
        let Some((old_start, old_end)) = groups
            .iter()
            .flatten()
            .filter(|op| op.tag() != DiffTag::Equal)
            .map(|op| op.old_range())
            .fold(None, |hull: Option<(usize, usize)>, range| match hull {
                Some((start, end)) => Some((start.min(range.start), end.max(range.end))),
                None => Some((range.start, range.end)),
            })
        else {
            return DiffOutcome::Identical;
        };

        // Everything outside the hull is equal, so it has the same length on
        // both sides.
        let new_start = old_start;
        let new_end = new_middle.len() - (old_middle.len() - old_end);

        let diff = text_diff(
            &old_segments,
            &new_segments,
            (prefix + old_start, prefix + old_end),
            (prefix + new_start, prefix + new_end),
        );
        tracing::debug!(region = %diff.region, ?unit, "located myers diff");
        DiffOutcome::Coalesced(diff)
    }
}
