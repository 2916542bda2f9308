use pivot_core::Pivot;
use pivot_ports::{PivotStore, StoreResult};
use std::sync::Mutex;

/// In-process pivot store
///
/// Behaves like a file that was never written until the first save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Vec<Pivot>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a saved list
    pub fn with_saved(pivots: Vec<Pivot>) -> Self {
        Self {
            saved: Mutex::new(Some(pivots)),
        }
    }

    /// Number of records in the last save, if any
    pub fn saved_len(&self) -> Option<usize> {
        self.lock().as_ref().map(Vec::len)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<Pivot>>> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PivotStore for MemoryStore {
    fn try_load(&self) -> StoreResult<Option<Vec<Pivot>>> {
        Ok(self.lock().clone())
    }

    fn try_save(&self, pivots: &[Pivot]) -> StoreResult<()> {
        *self.lock() = Some(pivots.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        "MemoryStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pivot_core::PivotType;
    use pivot_ports::LoadOutcome;
    use rust_decimal_macros::dec;

    fn pivot(pivot_type: PivotType) -> Pivot {
        Pivot::new(
            pivot_type,
            dec!(100),
            NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_until_saved() {
        let store = MemoryStore::new();
        assert!(matches!(store.load_checked(), LoadOutcome::Absent));
        assert!(store.load().is_empty());
        assert_eq!(store.saved_len(), None);
    }

    #[test]
    fn test_save_replaces_whole_list() {
        let store = MemoryStore::with_saved(vec![pivot(PivotType::HH)]);
        assert!(store.save(&[pivot(PivotType::LL), pivot(PivotType::LL)]));

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|p| p.pivot_type() == PivotType::LL));
    }
}
