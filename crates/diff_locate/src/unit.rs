//! Offset units and unit-sized segmentation
//!
//! Widgets disagree on what "one character" is. Everything in this crate is
//! measured in an [`OffsetUnit`], and texts are split into [`Segments`] whose
//! boundaries are the only places a diff region may start or end.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The unit a host widget counts positions in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// Extended grapheme clusters
    Graphemes,
    /// UTF-16 code units
    Utf16,
}

impl OffsetUnit {
    /// Length of `text` in this unit.
    pub fn measure(&self, text: &str) -> usize {
        match self {
            OffsetUnit::Chars => text.chars().count(),
            OffsetUnit::Graphemes => text.graphemes(true).count(),
            OffsetUnit::Utf16 => text.encode_utf16().count(),
        }
    }

    /// Byte index of unit `offset` in `text`, clamped to the text length.
    ///
    /// A UTF-16 offset that falls between the halves of a surrogate pair
    /// rounds down to the start of that character.
    pub fn byte_offset(&self, text: &str, offset: usize) -> usize {
        let segments = Segments::new(text, *self);
        segments.byte_offset(segments.index_at(offset))
    }

    /// Width of a single segment produced by this unit.
    fn width(&self, piece: &str) -> usize {
        match self {
            OffsetUnit::Chars | OffsetUnit::Graphemes => 1,
            OffsetUnit::Utf16 => piece.encode_utf16().count(),
        }
    }
}

/// A text split into unit-sized pieces, with running unit and byte offsets.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pieces: Vec<&'a str>,
    /// `units[i]` is the unit offset where piece `i` starts; one extra entry
    /// holds the total length.
    units: Vec<usize>,
    /// Same layout as `units`, in bytes.
    bytes: Vec<usize>,
}

impl<'a> Segments<'a> {
    /// Split `text` into pieces of `unit`.
    pub fn new(text: &'a str, unit: OffsetUnit) -> Self {
        let pieces: Vec<&'a str> = match unit {
            OffsetUnit::Graphemes => text.graphemes(true).collect(),
            OffsetUnit::Chars | OffsetUnit::Utf16 => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
        };

        let mut units = Vec::with_capacity(pieces.len() + 1);
        let mut bytes = Vec::with_capacity(pieces.len() + 1);
        let (mut unit_pos, mut byte_pos) = (0, 0);
        for piece in &pieces {
            units.push(unit_pos);
            bytes.push(byte_pos);
            unit_pos += unit.width(piece);
            byte_pos += piece.len();
        }
        units.push(unit_pos);
        bytes.push(byte_pos);

        Self {
            text,
            pieces,
            units,
            bytes,
        }
    }

    /// The pieces, in order.
    pub fn pieces(&self) -> &[&'a str] {
        &self.pieces
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check whether the text was empty.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Total length of the text in units.
    pub fn unit_len(&self) -> usize {
        self.units[self.pieces.len()]
    }

    /// Unit offset at which piece `index` starts. `index == len()` is the end.
    pub fn unit_offset(&self, index: usize) -> usize {
        self.units[index.min(self.pieces.len())]
    }

    /// Byte offset at which piece `index` starts. `index == len()` is the end.
    pub fn byte_offset(&self, index: usize) -> usize {
        self.bytes[index.min(self.pieces.len())]
    }

    /// Index of the last piece boundary at or before unit `offset`.
    pub fn index_at(&self, offset: usize) -> usize {
        // `units` is sorted and starts at 0, so the partition point is >= 1.
        self.units.partition_point(|&u| u <= offset) - 1
    }

    /// Text covered by pieces `[from, to)`.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.text[self.byte_offset(from)..self.byte_offset(to)]
    }
}
