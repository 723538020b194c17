//! Geometric classification of a selection against a diff region

use crate::{DiffRegion, SelectionRange};
use serde::{Deserialize, Serialize};

/// How a diff region sits relative to a selection.
///
/// The variants are checked in declaration order and the first match wins, so
/// e.g. a region that is both "after the tail" and "covering the cursor" can
/// never be reported twice. Together they cover every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlap {
    /// The edit lies entirely after the selection's tail.
    After,
    /// The edit lies strictly inside the selection.
    Within,
    /// The edit lies entirely at or before the cursor.
    Before,
    /// The edit begins inside the selection and runs to or past its tail.
    OverlapsTail,
    /// The edit covers the cursor.
    CoversCursor,
    /// The edit begins exactly at the tail of a non-empty selection.
    AbutsTail,
}

impl Overlap {
    /// Check whether the selected characters survive the edit unchanged.
    pub fn leaves_selection_intact(&self) -> bool {
        matches!(self, Overlap::After | Overlap::Before | Overlap::AbutsTail)
    }
}

/// Classify `selection` against `region`.
pub fn classify_overlap(selection: SelectionRange, region: DiffRegion) -> Overlap {
    let cursor = selection.start();
    let tail = selection.end();

    if tail < region.start() {
        Overlap::After
    } else if cursor < region.start() && tail > region.end() {
        Overlap::Within
    } else if cursor >= region.end() {
        Overlap::Before
    } else if region.start() > cursor && region.start() < tail {
        Overlap::OverlapsTail
    } else if region.start() <= cursor && cursor < region.end() {
        Overlap::CoversCursor
    } else {
        // Only `cursor < region.start == tail` reaches here.
        debug_assert!(cursor < region.start() && tail == region.start());
        Overlap::AbutsTail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(start: usize, end: usize) -> SelectionRange {
        SelectionRange::new(start, end).unwrap()
    }

    fn region(start: usize, end: usize, len: usize) -> DiffRegion {
        DiffRegion::new(start, end, len).unwrap()
    }

    #[test]
    fn test_classify_after() {
        assert_eq!(classify_overlap(sel(7, 10), region(26, 32, 0)), Overlap::After);
        assert_eq!(classify_overlap(sel(11, 11), region(19, 48, 0)), Overlap::After);
    }

    #[test]
    fn test_classify_within() {
        assert_eq!(classify_overlap(sel(7, 10), region(8, 9, 0)), Overlap::Within);
        assert_eq!(classify_overlap(sel(7, 10), region(9, 9, 12)), Overlap::Within);
    }

    #[test]
    fn test_classify_before() {
        assert_eq!(classify_overlap(sel(11, 11), region(0, 7, 0)), Overlap::Before);
        assert_eq!(classify_overlap(sel(7, 10), region(6, 6, 13)), Overlap::Before);
        // Insertion exactly at a caret pushes it along.
        assert_eq!(classify_overlap(sel(5, 5), region(5, 5, 2)), Overlap::Before);
    }

    #[test]
    fn test_classify_overlaps_tail() {
        assert_eq!(classify_overlap(sel(7, 10), region(9, 10, 0)), Overlap::OverlapsTail);
        assert_eq!(classify_overlap(sel(7, 10), region(9, 14, 3)), Overlap::OverlapsTail);
    }

    #[test]
    fn test_classify_covers_cursor() {
        assert_eq!(classify_overlap(sel(11, 11), region(7, 19, 0)), Overlap::CoversCursor);
        assert_eq!(classify_overlap(sel(7, 10), region(7, 9, 0)), Overlap::CoversCursor);
        assert_eq!(classify_overlap(sel(7, 10), region(6, 11, 0)), Overlap::CoversCursor);
    }

    #[test]
    fn test_classify_abuts_tail() {
        assert_eq!(classify_overlap(sel(7, 10), region(10, 12, 1)), Overlap::AbutsTail);
        // An insertion right after the selection does not widen it.
        assert_eq!(classify_overlap(sel(7, 10), region(10, 10, 4)), Overlap::AbutsTail);
    }

    #[test]
    fn test_leaves_selection_intact() {
        assert!(Overlap::After.leaves_selection_intact());
        assert!(Overlap::AbutsTail.leaves_selection_intact());
        assert!(!Overlap::Within.leaves_selection_intact());
        assert!(!Overlap::CoversCursor.leaves_selection_intact());
    }
}
