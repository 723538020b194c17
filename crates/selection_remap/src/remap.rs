//! Remapping a selection through a single replaced region
//!
//! The mapping is a pure function of the old selection and the region. Each
//! [`Overlap`] tag has its own arithmetic; lengths that would drop below zero
//! are floored so the result is always a well-formed range.

use crate::{classify_overlap, DiffRegion, Overlap, SelectionRange, TextOffset};

/// A remapped selection together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remapped {
    /// The selection in new-text coordinates
    pub selection: SelectionRange,
    /// Where the region sat relative to the old selection
    pub overlap: Overlap,
}

/// Map `selection` from the old text into the new text described by `region`.
///
/// # Example
///
/// ```
/// use selection_remap::{remap, DiffRegion, SelectionRange};
///
/// // "Growth and learning": "Growth " removed in front of a caret at 11.
/// let region = DiffRegion::deletion(0, 7);
/// assert_eq!(remap(SelectionRange::caret(11), region), SelectionRange::caret(4));
/// ```
pub fn remap(selection: SelectionRange, region: DiffRegion) -> SelectionRange {
    remap_traced(selection, region).selection
}

/// Like [`remap`], but also reports which overlap rule fired.
pub fn remap_traced(selection: SelectionRange, region: DiffRegion) -> Remapped {
    let overlap = classify_overlap(selection, region);
    let cursor = selection.start();
    let tail = selection.end();
    let len = selection.len() as isize;

    let (new_cursor, new_len) = match overlap {
        Overlap::After | Overlap::AbutsTail => (cursor, len),
        Overlap::Within => (cursor, len + region.delta()),
        Overlap::Before => (shift(cursor, region.delta()), len),
        Overlap::OverlapsTail => (cursor, len - (tail - region.start()) as isize),
        Overlap::CoversCursor => (
            region.new_end(),
            len - (region.end() - cursor) as isize,
        ),
    };

    let selection = SelectionRange::with_len(new_cursor, floor_len(new_len));
    debug_assert!(
        !overlap.leaves_selection_intact() || selection.len() == tail - cursor,
        "untouched selection changed length: {overlap:?}"
    );

    Remapped { selection, overlap }
}

/// Remap several independent selections through the same region.
pub fn remap_all<I>(selections: I, region: DiffRegion) -> Vec<SelectionRange>
where
    I: IntoIterator<Item = SelectionRange>,
{
    selections
        .into_iter()
        .map(|selection| remap(selection, region))
        .collect()
}

fn shift(offset: TextOffset, delta: isize) -> TextOffset {
    offset.saturating_add_signed(delta)
}

/// Negative lengths collapse to a caret at the computed cursor.
fn floor_len(len: isize) -> usize {
    len.max(0) as usize
}
