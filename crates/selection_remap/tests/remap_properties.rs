//! Property tests for selection remapping
//!
//! Texts are generated as char vectors, a single region is spliced into them,
//! and the remapped selection is checked against the spliced result.

use proptest::prelude::*;
use selection_remap::{classify_overlap, remap, remap_traced, DiffRegion, Overlap, SelectionRange};

/// An old text, one region of it, the replacement, and a selection.
#[derive(Debug, Clone)]
struct Edit {
    old: Vec<char>,
    replacement: Vec<char>,
    region: DiffRegion,
    selection: SelectionRange,
}

impl Edit {
    fn new_text(&self) -> Vec<char> {
        let mut new = self.old[..self.region.start()].to_vec();
        new.extend_from_slice(&self.replacement);
        new.extend_from_slice(&self.old[self.region.end()..]);
        new
    }
}

fn text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', ' ', '\n', 'é', '🦀']), 0..40)
}

fn ordered_pair(max: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..=max, 0..=max).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

fn edit() -> impl Strategy<Value = Edit> {
    (text(), text())
        .prop_flat_map(|(old, replacement)| {
            let len = old.len();
            (Just(old), Just(replacement), ordered_pair(len), ordered_pair(len))
        })
        .prop_map(|(old, replacement, (rs, re), (ss, se))| Edit {
            region: DiffRegion::new(rs, re, replacement.len()).unwrap(),
            selection: SelectionRange::new(ss, se).unwrap(),
            old,
            replacement,
        })
}

proptest! {
    #[test]
    fn remapped_selection_fits_new_text(edit in edit()) {
        let new = edit.new_text();
        let out = remap(edit.selection, edit.region);
        prop_assert!(out.start() <= out.end());
        prop_assert!(out.fits_within(new.len()), "{out} escapes text of {}", new.len());
    }

    #[test]
    fn noop_region_is_identity(old in text(), at in 0usize..40, sel in ordered_pair(40)) {
        let at = at.min(old.len());
        let selection = SelectionRange::new(sel.0, sel.1).unwrap();
        prop_assert_eq!(remap(selection, DiffRegion::insertion(at, 0)), selection);
    }

    #[test]
    fn untouched_selection_keeps_its_text(edit in edit()) {
        let new = edit.new_text();
        let out = remap_traced(edit.selection, edit.region);
        prop_assume!(out.overlap.leaves_selection_intact());

        let before = &edit.old[edit.selection.start()..edit.selection.end()];
        let after = &new[out.selection.start()..out.selection.end()];
        prop_assert_eq!(before, after);
    }

    #[test]
    fn inner_edit_resizes_by_delta(edit in edit()) {
        prop_assume!(classify_overlap(edit.selection, edit.region) == Overlap::Within);
        let out = remap(edit.selection, edit.region);
        prop_assert_eq!(out.start(), edit.selection.start());
        prop_assert_eq!(
            out.len() as isize,
            edit.selection.len() as isize + edit.region.delta()
        );
    }

    #[test]
    fn covered_cursor_lands_after_replacement(edit in edit()) {
        prop_assume!(classify_overlap(edit.selection, edit.region) == Overlap::CoversCursor);
        let out = remap(edit.selection, edit.region);
        prop_assert_eq!(out.start(), edit.region.new_end());
        prop_assert!(out.len() <= edit.selection.len());
    }
}

#[test]
fn test_every_overlap_is_reachable() {
    let selection = SelectionRange::new(4, 8).unwrap();
    let cases = [
        (DiffRegion::new(9, 10, 0).unwrap(), Overlap::After),
        (DiffRegion::new(5, 6, 3).unwrap(), Overlap::Within),
        (DiffRegion::new(1, 3, 0).unwrap(), Overlap::Before),
        (DiffRegion::new(6, 10, 1).unwrap(), Overlap::OverlapsTail),
        (DiffRegion::new(2, 5, 2).unwrap(), Overlap::CoversCursor),
        (DiffRegion::new(8, 9, 2).unwrap(), Overlap::AbutsTail),
    ];
    for (region, expected) in cases {
        assert_eq!(classify_overlap(selection, region), expected, "{region}");
    }
}
