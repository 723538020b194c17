//! Results of locating a difference between two texts

use crate::OffsetUnit;
use selection_remap::DiffRegion;
use serde::{Deserialize, Serialize};

/// A located region of the old text together with its literal replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiff {
    /// The replaced span, in old-text units
    pub region: DiffRegion,
    /// The text that replaced it
    pub replacement: String,
}

impl TextDiff {
    /// Rebuild the new text by splicing the replacement into `old`.
    pub fn apply_to(&self, old: &str, unit: OffsetUnit) -> String {
        let start = unit.byte_offset(old, self.region.start());
        let end = unit.byte_offset(old, self.region.end());
        let mut out = String::with_capacity(old.len() - (end - start) + self.replacement.len());
        out.push_str(&old[..start]);
        out.push_str(&self.replacement);
        out.push_str(&old[end..]);
        out
    }
}

/// What a [`DiffLocator`](crate::DiffLocator) found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// The texts are equal.
    Identical,
    /// A single contiguous region describes the whole difference.
    Coalesced(TextDiff),
    /// The texts differ in several disjoint places.
    NotCoalescible {
        /// Number of disjoint regions found
        regions: usize,
    },
}

impl DiffOutcome {
    /// The located diff, if the difference coalesced into one region.
    pub fn coalesced(&self) -> Option<&TextDiff> {
        match self {
            DiffOutcome::Coalesced(diff) => Some(diff),
            _ => None,
        }
    }
}

/// Default context radius for [`DiffStrategy::Myers`].
pub const DEFAULT_COALESCE_RADIUS: usize = 4;

/// Which locator to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Common prefix and suffix; every difference coalesces into one span.
    #[default]
    Affix,
    /// Myers diff; unchanged runs longer than twice `coalesce_radius`
    /// separate edits into distinct regions.
    Myers {
        #[serde(default = "default_coalesce_radius")]
        coalesce_radius: usize,
    },
}

fn default_coalesce_radius() -> usize {
    DEFAULT_COALESCE_RADIUS
}
