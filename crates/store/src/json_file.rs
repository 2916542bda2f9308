use pivot_core::Pivot;
use pivot_ports::{PivotStore, StoreError, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where the pivot list lives unless configured otherwise
pub const DEFAULT_STORE_PATH: &str = "data/initial_pivots.json";

/// Pivot list persisted as a single JSON array
///
/// The file is rewritten in place on every save. A reader racing a writer may
/// see a truncated document; callers serialize their own access.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// First free `<file>.corrupt`, `<file>.corrupt.1`, ... next to the document
    fn quarantine_path(&self) -> PathBuf {
        let mut base = self.path.clone().into_os_string();
        base.push(".corrupt");
        let base = PathBuf::from(base);

        let mut candidate = base.clone();
        let mut n = 1;
        while candidate.exists() {
            let mut numbered = base.clone().into_os_string();
            numbered.push(format!(".{}", n));
            candidate = PathBuf::from(numbered);
            n += 1;
        }
        candidate
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display_path(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl PivotStore for JsonFileStore {
    fn try_load(&self) -> StoreResult<Option<Vec<Pivot>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No pivot document at {}", self.display_path());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let pivots: Vec<Pivot> =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: self.display_path(),
                reason: e.to_string(),
            })?;

        log::debug!("Loaded {} pivots from {}", pivots.len(), self.display_path());
        Ok(Some(pivots))
    }

    fn try_save(&self, pivots: &[Pivot]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(pivots)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        log::debug!("Saved {} pivots to {}", pivots.len(), self.display_path());
        Ok(())
    }

    fn try_quarantine(&self) -> StoreResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| self.io_error(e))?;

        let target = target.display().to_string();
        log::warn!("Moved unreadable {} to {}", self.display_path(), target);
        Ok(Some(target))
    }

    fn name(&self) -> &str {
        "JsonFileStore"
    }
}
