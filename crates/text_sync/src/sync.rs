//! Replacing an input's text while keeping its selection
//!
//! One call reads the old text and selection, locates the changed region,
//! writes the new text once and, when there is a selection to carry over,
//! writes the remapped selection once. Nothing is retried and nothing fails:
//! losing the exact caret is preferable to interrupting live editing.

use crate::{FallbackSelection, SyncSettings, TextInput};
use diff_locate::{locator_for, DiffLocator, DiffOutcome, OffsetUnit};
use selection_remap::{remap_traced, Overlap, SelectionRange};
use std::fmt;

/// Why a sync call left the input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No input was supplied
    NoInput,
    /// No new text was supplied
    NoText,
    /// The input's text could not be read
    Unreadable,
    /// The new text equals the current text
    Unchanged,
}

/// What a sync call did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing was written.
    Skipped(SkipReason),
    /// The text was written; the selection was left to the input.
    TextOnly,
    /// The text was written and the selection carried over.
    Remapped {
        from: SelectionRange,
        to: SelectionRange,
        overlap: Overlap,
    },
    /// The text was written and the selection reset, because the change
    /// could not be described by one region.
    Reset(SelectionRange),
}

impl SyncOutcome {
    /// Check whether the text was written.
    pub fn wrote_text(&self) -> bool {
        !matches!(self, SyncOutcome::Skipped(_))
    }

    /// The selection written back, if any.
    pub fn written_selection(&self) -> Option<SelectionRange> {
        match self {
            SyncOutcome::Remapped { to, .. } => Some(*to),
            SyncOutcome::Reset(selection) => Some(*selection),
            SyncOutcome::Skipped(_) | SyncOutcome::TextOnly => None,
        }
    }
}

/// Replaces input text while preserving the selection.
pub struct TextSync {
    settings: SyncSettings,
    locator: Box<dyn DiffLocator + Send + Sync>,
}

impl TextSync {
    /// Create a syncer using the locator the settings name.
    pub fn new(settings: SyncSettings) -> Self {
        Self {
            locator: locator_for(settings.diff),
            settings,
        }
    }

    /// Create a syncer with a custom locator; `settings.diff` is ignored.
    pub fn with_locator(
        settings: SyncSettings,
        locator: impl DiffLocator + Send + Sync + 'static,
    ) -> Self {
        Self {
            settings,
            locator: Box::new(locator),
        }
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Replace the text of `input` with `new_text`, keeping the selection.
    ///
    /// The exclusive borrow of `input` is held for the whole call, so no other
    /// sync can interleave its reads and writes with this one.
    pub fn sync(&self, input: Option<&mut dyn TextInput>, new_text: Option<&str>) -> SyncOutcome {
        let Some(input) = input else {
            return SyncOutcome::Skipped(SkipReason::NoInput);
        };
        let Some(new_text) = new_text else {
            return SyncOutcome::Skipped(SkipReason::NoText);
        };
        let Some(old_text) = input.text() else {
            tracing::debug!("input text unreadable, skipping sync");
            return SyncOutcome::Skipped(SkipReason::Unreadable);
        };
        if old_text == new_text {
            return SyncOutcome::Skipped(SkipReason::Unchanged);
        }

        let unit = input.offset_unit();
        let selection = self.checked_selection(&*input, &old_text, unit);
        let diff = match self.locator.locate(&old_text, new_text, unit) {
            DiffOutcome::Identical => return SyncOutcome::Skipped(SkipReason::Unchanged),
            DiffOutcome::Coalesced(diff) => match diff.region.check_bounds(unit.measure(&old_text)) {
                Ok(()) => Some(diff),
                Err(e) => {
                    tracing::warn!(region = %diff.region, "locator returned a bad region: {}", e);
                    None
                }
            },
            DiffOutcome::NotCoalescible { regions } => {
                tracing::warn!(
                    regions,
                    fallback = ?self.settings.fallback,
                    "text changed in several places, selection not preserved"
                );
                None
            }
        };

        input.set_text(new_text);

        let Some(selection) = selection else {
            tracing::debug!("input has no selection, wrote text only");
            return SyncOutcome::TextOnly;
        };
        let Some(diff) = diff else {
            return self.reset(input, new_text, unit);
        };

        let remapped = remap_traced(selection, diff.region);
        tracing::debug!(
            region = %diff.region,
            from = %selection,
            to = %remapped.selection,
            overlap = ?remapped.overlap,
            "remapped selection"
        );
        input.set_selected_range(remapped.selection);
        SyncOutcome::Remapped {
            from: selection,
            to: remapped.selection,
            overlap: remapped.overlap,
        }
    }

    /// Read the selection and bring it within the old text, per settings.
    fn checked_selection(
        &self,
        input: &dyn TextInput,
        old_text: &str,
        unit: OffsetUnit,
    ) -> Option<SelectionRange> {
        let selection = input.selected_range()?;
        let old_len = unit.measure(old_text);
        if selection.fits_within(old_len) {
            return Some(selection);
        }

        if self.settings.clamp_out_of_range {
            let clamped = selection.clamp_to(old_len);
            tracing::warn!(%selection, %clamped, old_len, "selection out of range, clamping");
            Some(clamped)
        } else {
            tracing::warn!(%selection, old_len, "selection out of range, ignoring");
            None
        }
    }

    fn reset(&self, input: &mut dyn TextInput, new_text: &str, unit: OffsetUnit) -> SyncOutcome {
        let caret = match self.settings.fallback {
            FallbackSelection::Start => SelectionRange::caret(0),
            FallbackSelection::End => SelectionRange::caret(unit.measure(new_text)),
            FallbackSelection::HostDefault => return SyncOutcome::TextOnly,
        };
        input.set_selected_range(caret);
        SyncOutcome::Reset(caret)
    }
}

impl Default for TextSync {
    fn default() -> Self {
        Self::new(SyncSettings::default())
    }
}

impl fmt::Debug for TextSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSync")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Replace the text of `input` with `new_text` using default settings.
///
/// A missing input, missing text or unreadable input is a silent no-op.
pub fn sync_text(input: Option<&mut dyn TextInput>, new_text: Option<&str>) {
    TextSync::default().sync(input, new_text);
}
