//! Selection Remap - keep a selection stable across a text replacement
//!
//! When the whole text of an input is replaced programmatically, the old
//! selection has to be carried into the new text. Given the single contiguous
//! region in which the two versions differ, [`remap`] computes where the same
//! logical selection lands.
//!
//! The caller guarantees the region is the *only* difference between the two
//! texts. Multiple disjoint edits must be coalesced (or rejected) upstream.
//!
//! # Example
//!
//! ```
//! use selection_remap::{classify_overlap, remap, DiffRegion, Overlap, SelectionRange};
//!
//! // "Growth and learning" -> "Growth ad learning", with "and" selected.
//! let selection = SelectionRange::new(7, 10).unwrap();
//! let region = DiffRegion::deletion(8, 9);
//!
//! assert_eq!(classify_overlap(selection, region), Overlap::Within);
//! assert_eq!(remap(selection, region), SelectionRange::new(7, 9).unwrap());
//! ```

mod error;
mod overlap;
mod range;
mod remap;

pub use error::*;
pub use overlap::*;
pub use range::*;
pub use remap::*;
