//! In-memory text inputs
//!
//! [`MemoryTextInput`] behaves like a platform text control closely enough to
//! drive syncing without a UI toolkit: writing text resets the selection to
//! the end, and a single-line field only has a selection while focused.

use crate::TextInput;
use diff_locate::OffsetUnit;
use selection_remap::SelectionRange;

/// The flavor of input being modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputKind {
    /// Single-line field; reports a selection only while focused
    Field,
    /// Multi-line view; always reports its selection
    View,
}

/// A text input backed by a `String`.
#[derive(Debug, Clone)]
pub struct MemoryTextInput {
    kind: TextInputKind,
    text: Option<String>,
    selection: SelectionRange,
    focused: bool,
    unit: OffsetUnit,
    text_writes: usize,
    selection_writes: usize,
}

impl MemoryTextInput {
    /// Create an input of `kind` holding `text`, caret at the end, unfocused.
    pub fn new(kind: TextInputKind, text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = SelectionRange::caret(OffsetUnit::Chars.measure(&text));
        Self {
            kind,
            text: Some(text),
            selection,
            focused: false,
            unit: OffsetUnit::Chars,
            text_writes: 0,
            selection_writes: 0,
        }
    }

    /// Create a single-line field.
    pub fn field(text: impl Into<String>) -> Self {
        Self::new(TextInputKind::Field, text)
    }

    /// Create a multi-line view.
    pub fn view(text: impl Into<String>) -> Self {
        Self::new(TextInputKind::View, text)
    }

    /// Create an input whose text cannot be read.
    pub fn without_text(kind: TextInputKind) -> Self {
        Self {
            text: None,
            ..Self::new(kind, String::new())
        }
    }

    /// Count positions in `unit` instead of chars. The caret moves to the end.
    pub fn with_unit(mut self, unit: OffsetUnit) -> Self {
        self.unit = unit;
        self.selection = SelectionRange::caret(self.len());
        self
    }

    pub fn kind(&self) -> TextInputKind {
        self.kind
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Take focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Give up focus. The stored selection is kept for when focus returns.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Length of the text in this input's unit.
    pub fn len(&self) -> usize {
        self.text.as_deref().map_or(0, |text| self.unit.measure(text))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select `len` units from `start`, clamped to the text like a platform
    /// control would. Does not count as a sync write.
    pub fn select(&mut self, start: usize, len: usize) {
        self.selection = SelectionRange::with_len(start, len).clamp_to(self.len());
    }

    /// The stored selection, regardless of focus.
    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// The selected text, or `None` if the text is unreadable.
    pub fn selected_text(&self) -> Option<&str> {
        let text = self.text.as_deref()?;
        let start = self.unit.byte_offset(text, self.selection.start());
        let end = self.unit.byte_offset(text, self.selection.end());
        Some(&text[start..end])
    }

    /// Number of [`TextInput::set_text`] calls so far.
    pub fn text_writes(&self) -> usize {
        self.text_writes
    }

    /// Number of [`TextInput::set_selected_range`] calls so far.
    pub fn selection_writes(&self) -> usize {
        self.selection_writes
    }

    fn reports_selection(&self) -> bool {
        match self.kind {
            TextInputKind::Field => self.focused,
            TextInputKind::View => true,
        }
    }
}

impl TextInput for MemoryTextInput {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn selected_range(&self) -> Option<SelectionRange> {
        self.reports_selection().then_some(self.selection)
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
        self.selection = SelectionRange::caret(self.len());
        self.text_writes += 1;
    }

    fn set_selected_range(&mut self, range: SelectionRange) {
        self.selection = range.clamp_to(self.len());
        self.selection_writes += 1;
    }

    fn offset_unit(&self) -> OffsetUnit {
        self.unit
    }
}
