//! Text Sync - replace an input's text without losing the user's selection
//!
//! Programmatic updates such as autocomplete, autocorrect or a collaborator's
//! edit replace the whole text of an input. Done naively, that throws the
//! caret to the end of the field. [`TextSync`] locates the single region that
//! changed, writes the new text, and carries the old selection across with
//! [`selection_remap::remap`].
//!
//! The host toolkit is reached only through the [`TextInput`] capability;
//! [`MemoryTextInput`] implements it without any UI.
//!
//! # Example
//!
//! ```
//! use selection_remap::SelectionRange;
//! use text_sync::{sync_text, MemoryTextInput};
//!
//! let mut input = MemoryTextInput::view("Growth and learning");
//! input.focus();
//! input.select(11, 0);
//!
//! sync_text(Some(&mut input), Some("Growing and learning"));
//! assert_eq!(input.selection(), SelectionRange::caret(12));
//! ```

mod error;
mod input;
mod memory;
mod settings;
mod sync;

pub use error::{Result, SettingsError};
pub use input::TextInput;
pub use memory::{MemoryTextInput, TextInputKind};
pub use settings::{FallbackSelection, SyncSettings};
pub use sync::{sync_text, SkipReason, SyncOutcome, TextSync};

pub use diff_locate::{DiffStrategy, OffsetUnit};
