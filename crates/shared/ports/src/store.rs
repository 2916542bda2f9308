use pivot_core::Pivot;

use crate::error::{StoreError, StoreResult};

/// Result of a load that keeps "nothing saved yet" apart from "saved data is unusable"
#[derive(Debug)]
pub enum LoadOutcome {
    /// No prior save exists
    Absent,
    /// The previously saved list, in insertion order
    Loaded(Vec<Pivot>),
    /// Something was there but could not be read or decoded
    Degraded(StoreError),
}

impl LoadOutcome {
    /// Collapse to the plain list; both `Absent` and `Degraded` become empty
    pub fn into_pivots(self) -> Vec<Pivot> {
        match self {
            LoadOutcome::Loaded(pivots) => pivots,
            LoadOutcome::Absent | LoadOutcome::Degraded(_) => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, LoadOutcome::Degraded(_))
    }
}

/// Port for durable storage of the pivot list
///
/// The whole list is loaded and saved at once. Implementations assume a
/// single writer; nothing here locks.
pub trait PivotStore {
    /// Read the saved list. `Ok(None)` means nothing has been saved yet.
    fn try_load(&self) -> StoreResult<Option<Vec<Pivot>>>;

    /// Replace the saved list with `pivots`
    fn try_save(&self, pivots: &[Pivot]) -> StoreResult<()>;

    /// Move unreadable saved data out of the way so the next save cannot
    /// overwrite it. Returns where it went, or `None` if there was nothing to move.
    fn try_quarantine(&self) -> StoreResult<Option<String>> {
        Ok(None)
    }

    /// Identifier used in log lines
    fn name(&self) -> &str {
        "PivotStore"
    }

    /// Load, reporting corruption separately from absence
    fn load_checked(&self) -> LoadOutcome {
        match self.try_load() {
            Ok(Some(pivots)) => LoadOutcome::Loaded(pivots),
            Ok(None) => LoadOutcome::Absent,
            Err(e) => LoadOutcome::Degraded(e),
        }
    }

    /// Load the saved list; absence and failure both yield an empty list
    fn load(&self) -> Vec<Pivot> {
        let outcome = self.load_checked();
        if let LoadOutcome::Degraded(e) = &outcome {
            log::warn!("{}: ignoring unreadable pivot data: {}", self.name(), e);
        }
        outcome.into_pivots()
    }

    /// Save the list, returning false on any failure
    fn save(&self, pivots: &[Pivot]) -> bool {
        match self.try_save(pivots) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}: failed to save {} pivots: {}", self.name(), pivots.len(), e);
                false
            }
        }
    }
}
