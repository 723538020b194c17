//! Diff Locate - find the single region in which two texts differ
//!
//! Text replacement only keeps the selection stable when the change between
//! the old and new text can be described as one contiguous region. This crate
//! provides the [`DiffLocator`] capability and two implementations:
//!
//! - [`AffixLocator`]: strips the common prefix and suffix. Every difference
//!   collapses into the span between them.
//! - [`MyersLocator`]: runs a Myers diff and reports
//!   [`DiffOutcome::NotCoalescible`] when edits are too far apart to treat as
//!   one region.
//!
//! All offsets are measured in an [`OffsetUnit`] chosen by the caller.
//!
//! # Example
//!
//! ```
//! use diff_locate::{locate, DiffOutcome, OffsetUnit};
//! use selection_remap::DiffRegion;
//!
//! let outcome = locate("Growth and learning", "Growth & learning", OffsetUnit::Chars);
//! let diff = outcome.coalesced().unwrap();
//! assert_eq!(diff.region, DiffRegion::new(7, 10, 1).unwrap());
//! assert_eq!(diff.replacement, "&");
//! ```

mod affix;
mod locator;
mod myers;
mod outcome;
mod unit;

pub use affix::AffixLocator;
pub use locator::{locate, locator_for, DiffLocator};
pub use myers::{MyersLocator, MAX_COALESCE_RADIUS};
pub use outcome::{DiffOutcome, DiffStrategy, TextDiff, DEFAULT_COALESCE_RADIUS};
pub use unit::{OffsetUnit, Segments};
