//! Pivot journal - the caller side of parser and store
//!
//! Holds the pivot list in entry order. Nothing is deduplicated or sorted.

use pivot_core::Pivot;
use pivot_parser::PivotParser;
use pivot_ports::{Clock, LoadOutcome, PivotStore};
use pivot_store::JsonFileStore;
use std::sync::Arc;

use crate::config::{ConfigError, JournalConfig};

/// In-memory pivot list backed by a store
pub struct PivotJournal<S: PivotStore> {
    parser: PivotParser,
    store: S,
    pivots: Vec<Pivot>,
    autosave: bool,
    degraded_load: bool,
    /// Unreadable data still sits where the next save would write
    quarantine_pending: bool,
}

impl PivotJournal<JsonFileStore> {
    /// Open the JSON-backed journal described by `config`
    pub fn from_config(config: &JournalConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        let parser = PivotParser::with_calendar(clock, config.calendar()?);
        let store = JsonFileStore::new(config.store_path.clone());
        Ok(Self::open(store, parser).with_autosave(config.autosave))
    }
}

impl<S: PivotStore> PivotJournal<S> {
    /// Load whatever the store holds and start from there
    ///
    /// Unreadable data starts the journal empty; see
    /// [`load_was_degraded`](Self::load_was_degraded). That data is moved
    /// aside by the store before the first save, never overwritten.
    pub fn open(store: S, parser: PivotParser) -> Self {
        let outcome = store.load_checked();
        let degraded_load = outcome.is_degraded();

        match &outcome {
            LoadOutcome::Absent => log::info!("{}: no saved pivots, starting empty", store.name()),
            LoadOutcome::Loaded(pivots) => {
                log::info!("{}: loaded {} pivots", store.name(), pivots.len())
            }
            LoadOutcome::Degraded(e) => {
                log::warn!("{}: saved pivots unreadable, starting empty: {}", store.name(), e)
            }
        }

        Self {
            parser,
            store,
            pivots: outcome.into_pivots(),
            autosave: false,
            degraded_load,
            quarantine_pending: degraded_load,
        }
    }

    /// Save after every successful [`record`](Self::record)
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Parse `raw` and append the result.
    ///
    /// Returns `None` when the line is rejected; nothing is recorded then.
    pub fn record(&mut self, raw: &str) -> Option<Pivot> {
        match self.parser.parse(raw) {
            Ok(pivot) => {
                log::info!("Recorded pivot {} ({})", pivot, pivot.direction());
                self.push(pivot.clone());
                Some(pivot)
            }
            Err(e) => {
                log::warn!("Ignoring pivot input '{}': {}", raw.trim(), e);
                None
            }
        }
    }

    /// Append an already-built pivot
    pub fn push(&mut self, pivot: Pivot) {
        self.pivots.push(pivot);
        if self.autosave {
            self.save();
        }
    }

    /// Persist the whole list. False if the store failed.
    ///
    /// After a degraded load the unreadable data is quarantined first; if that
    /// fails nothing is written.
    pub fn save(&mut self) -> bool {
        if self.quarantine_pending {
            match self.store.try_quarantine() {
                Ok(moved_to) => {
                    if let Some(moved_to) = moved_to {
                        log::warn!("{}: unreadable pivots kept at {}", self.store.name(), moved_to);
                    }
                    self.quarantine_pending = false;
                }
                Err(e) => {
                    log::warn!(
                        "{}: refusing to overwrite unreadable pivots: {}",
                        self.store.name(),
                        e
                    );
                    return false;
                }
            }
        }
        self.store.save(&self.pivots)
    }

    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// True if the store had data at open that could not be read
    pub fn load_was_degraded(&self) -> bool {
        self.degraded_load
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn parser(&self) -> &PivotParser {
        &self.parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pivot_clock::FixedClock;
    use pivot_ports::{StoreError, StoreResult};
    use pivot_store::MemoryStore;
    use std::sync::Mutex;

    /// Store whose saved data never decodes
    struct UnreadableStore {
        quarantine_works: bool,
        quarantined: Mutex<usize>,
        saves: Mutex<usize>,
    }

    impl UnreadableStore {
        fn new(quarantine_works: bool) -> Self {
            Self {
                quarantine_works,
                quarantined: Mutex::new(0),
                saves: Mutex::new(0),
            }
        }
    }

    impl PivotStore for UnreadableStore {
        fn try_load(&self) -> StoreResult<Option<Vec<Pivot>>> {
            Err(StoreError::Corrupt {
                path: "memory".to_string(),
                reason: "bad record".to_string(),
            })
        }

        fn try_save(&self, _pivots: &[Pivot]) -> StoreResult<()> {
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }

        fn try_quarantine(&self) -> StoreResult<Option<String>> {
            if !self.quarantine_works {
                return Err(StoreError::Serialization("rename refused".to_string()));
            }
            *self.quarantined.lock().unwrap() += 1;
            Ok(Some("memory.corrupt".to_string()))
        }
    }

    fn parser() -> PivotParser {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 23, 0, 0, 0).unwrap());
        PivotParser::new(Arc::new(clock))
    }

    #[test]
    fn test_open_empty_store() {
        let journal = PivotJournal::open(MemoryStore::new(), parser());
        assert!(journal.is_empty());
        assert!(!journal.load_was_degraded());
    }

    #[test]
    fn test_record_appends_in_entry_order() {
        let mut journal = PivotJournal::open(MemoryStore::new(), parser());

        assert!(journal.record("HH:100:2025-03-24:06:30").is_some());
        assert!(journal.record("LL:90:2025-03-20:06:30").is_some());
        assert!(journal.record("HH:100:2025-03-24:06:30").is_some());

        let dates: Vec<String> = journal.pivots().iter().map(Pivot::date_string).collect();
        assert_eq!(dates, ["2025-03-24", "2025-03-20", "2025-03-24"]);
    }

    #[test]
    fn test_rejected_input_records_nothing() {
        let mut journal = PivotJournal::open(MemoryStore::new(), parser());
        assert!(journal.record("LL:abc:06:30").is_none());
        assert!(journal.record("LL:100").is_none());
        assert!(journal.is_empty());
    }

    #[test]
    fn test_without_autosave_store_is_untouched() {
        let mut journal = PivotJournal::open(MemoryStore::new(), parser());
        journal.record("LL:100:06:30");
        assert_eq!(journal.store().saved_len(), None);

        assert!(journal.save());
        assert_eq!(journal.store().saved_len(), Some(1));
    }

    #[test]
    fn test_autosave() {
        let mut journal = PivotJournal::open(MemoryStore::new(), parser()).with_autosave(true);
        journal.record("LL:100:06:30");
        journal.record("HL:101:07:30");
        assert_eq!(journal.store().saved_len(), Some(2));

        // Rejected input does not trigger a save
        journal.record("bogus");
        assert_eq!(journal.store().saved_len(), Some(2));
    }

    #[test]
    fn test_degraded_data_is_quarantined_once_before_saving() {
        let mut journal = PivotJournal::open(UnreadableStore::new(true), parser());
        assert!(journal.load_was_degraded());

        assert!(journal.save());
        assert!(journal.save());
        assert_eq!(*journal.store().quarantined.lock().unwrap(), 1);
        assert_eq!(*journal.store().saves.lock().unwrap(), 2);
    }

    #[test]
    fn test_failed_quarantine_blocks_save() {
        let mut journal =
            PivotJournal::open(UnreadableStore::new(false), parser()).with_autosave(true);

        assert!(journal.record("LL:100:06:30").is_some());
        assert!(!journal.save());
        assert_eq!(*journal.store().saves.lock().unwrap(), 0);
        assert_eq!(journal.len(), 1);
    }
}
