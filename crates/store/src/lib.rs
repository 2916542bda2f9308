//! Pivot Store Adapters
//!
//! Implementations of the [`PivotStore`](pivot_ports::PivotStore) port:
//!
//! - [`JsonFileStore`]: one pretty-printed JSON document on disk
//! - [`MemoryStore`]: process-local, nothing survives a restart

mod json_file;
mod memory;

pub use json_file::{DEFAULT_STORE_PATH, JsonFileStore};
pub use memory::MemoryStore;

// Re-export the port for convenience
pub use pivot_ports::{LoadOutcome, PivotStore, StoreError};
