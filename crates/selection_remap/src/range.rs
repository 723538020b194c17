//! Selection ranges and diff regions
//!
//! Both types are plain values measured in the host widget's offset unit.
//! Neither knows which text it indexes; bounds against a concrete text are
//! checked separately with [`SelectionRange::fits_within`] and
//! [`DiffRegion::check_bounds`].

use crate::{RangeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An offset into a text, counted in the widget's unit (never bytes).
pub type TextOffset = usize;

/// A half-open selection `[start, end)` into one version of a text.
///
/// `start == end` is a caret. The start edge is the "cursor" all remapping
/// arithmetic is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct SelectionRange {
    start: TextOffset,
    end: TextOffset,
}

impl SelectionRange {
    /// Create a selection, rejecting `start > end`.
    pub fn new(start: TextOffset, end: TextOffset) -> Result<Self> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create an empty selection (a caret) at `offset`.
    pub fn caret(offset: TextOffset) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Create a selection starting at `start` spanning `len` units.
    pub fn with_len(start: TextOffset, len: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(len),
        }
    }

    /// Create a selection from two offsets in either order.
    pub fn from_unordered(a: TextOffset, b: TextOffset) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The cursor edge of the selection.
    pub fn start(&self) -> TextOffset {
        self.start
    }

    /// The tail edge of the selection.
    pub fn end(&self) -> TextOffset {
        self.end
    }

    /// Number of selected units.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether this selection is a caret with nothing selected.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Alias of [`is_caret`](Self::is_caret) for collection-style callers.
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Check whether both edges lie inside a text of `text_len` units.
    pub fn fits_within(&self, text_len: usize) -> bool {
        self.end <= text_len
    }

    /// Pull both edges back inside a text of `text_len` units.
    pub fn clamp_to(&self, text_len: usize) -> Self {
        Self {
            start: self.start.min(text_len),
            end: self.end.min(text_len),
        }
    }
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::caret(0)
    }
}

impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl TryFrom<(TextOffset, TextOffset)> for SelectionRange {
    type Error = RangeError;

    fn try_from((start, end): (TextOffset, TextOffset)) -> Result<Self> {
        Self::new(start, end)
    }
}

/// The single contiguous span of the old text that an update replaced.
///
/// `[start, end)` is in old-text coordinates; `replacement_len` is the length
/// of the run that took its place in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRegion", into = "RawRegion")]
pub struct DiffRegion {
    start: TextOffset,
    end: TextOffset,
    replacement_len: usize,
}

impl DiffRegion {
    /// Create a region, rejecting `start > end`.
    pub fn new(start: TextOffset, end: TextOffset, replacement_len: usize) -> Result<Self> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self {
            start,
            end,
            replacement_len,
        })
    }

    /// A region removing `removed_len` units from `start`.
    pub fn with_len(start: TextOffset, removed_len: usize, replacement_len: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(removed_len),
            replacement_len,
        }
    }

    /// A pure insertion of `len` units at `at`.
    pub fn insertion(at: TextOffset, len: usize) -> Self {
        Self {
            start: at,
            end: at,
            replacement_len: len,
        }
    }

    /// A pure deletion of `[start, end)`, given in either order.
    pub fn deletion(start: TextOffset, end: TextOffset) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
            replacement_len: 0,
        }
    }

    /// First replaced offset in the old text.
    pub fn start(&self) -> TextOffset {
        self.start
    }

    /// One past the last replaced offset in the old text.
    pub fn end(&self) -> TextOffset {
        self.end
    }

    /// Length of the text that replaced the span.
    pub fn replacement_len(&self) -> usize {
        self.replacement_len
    }

    /// Number of old-text units the region removed.
    pub fn removed_len(&self) -> usize {
        self.end - self.start
    }

    /// Net change in text length; negative for a net deletion.
    pub fn delta(&self) -> isize {
        self.replacement_len as isize - self.removed_len() as isize
    }

    /// Offset in the new text just past the replacement.
    pub fn new_end(&self) -> TextOffset {
        self.start + self.replacement_len
    }

    /// Check whether the region changes nothing at all.
    pub fn is_noop(&self) -> bool {
        self.start == self.end && self.replacement_len == 0
    }

    /// Verify the region lies inside an old text of `old_len` units.
    pub fn check_bounds(&self, old_len: usize) -> Result<()> {
        if self.end > old_len {
            return Err(RangeError::OutOfBounds {
                end: self.end,
                len: old_len,
            });
        }
        Ok(())
    }
}

impl fmt::Display for DiffRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) -> {} units",
            self.start, self.end, self.replacement_len
        )
    }
}

// Wire shapes; deserialization goes through the validating constructors.

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: TextOffset,
    end: TextOffset,
}

impl TryFrom<RawRange> for SelectionRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl From<SelectionRange> for RawRange {
    fn from(range: SelectionRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawRegion {
    start: TextOffset,
    end: TextOffset,
    replacement_len: usize,
}

impl TryFrom<RawRegion> for DiffRegion {
    type Error = RangeError;

    fn try_from(raw: RawRegion) -> Result<Self> {
        Self::new(raw.start, raw.end, raw.replacement_len)
    }
}

impl From<DiffRegion> for RawRegion {
    fn from(region: DiffRegion) -> Self {
        Self {
            start: region.start,
            end: region.end,
            replacement_len: region.replacement_len,
        }
    }
}
