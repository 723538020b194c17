//! The host text input capability

use diff_locate::OffsetUnit;
use selection_remap::SelectionRange;

/// Read/write access to an editable text input owned by the host toolkit.
///
/// Offsets are counted from the start of the text in [`offset_unit`]
/// units, and must mean the same thing for reads and writes.
///
/// [`offset_unit`]: TextInput::offset_unit
pub trait TextInput {
    /// The current text, or `None` if it cannot be read.
    fn text(&self) -> Option<String>;

    /// The current selection, or `None` if the input has none (e.g. it is not
    /// focused).
    fn selected_range(&self) -> Option<SelectionRange>;

    /// Replace the whole text.
    fn set_text(&mut self, text: &str);

    /// Replace the selection.
    fn set_selected_range(&mut self, range: SelectionRange);

    /// Unit the input counts positions in.
    fn offset_unit(&self) -> OffsetUnit {
        OffsetUnit::Chars
    }
}
