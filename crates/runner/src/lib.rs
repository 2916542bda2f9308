//! Pivot Runner - Journal of Hand-Entered Pivots
//!
//! Wires the parser to a store:
//!
//! - **Config**: store location, local UTC offset, autosave
//! - **Journal**: the in-memory list, loaded at open and saved as a whole
//!
//! ## Flow
//!
//! ```text
//!   raw line ──► PivotParser ──► Pivot ──► PivotJournal (Vec<Pivot>)
//!                    ▲                            │ save / load
//!                  Clock                          ▼
//!                                            PivotStore
//! ```

pub mod config;
pub mod journal;

// Re-export main types
pub use config::{ConfigError, JournalConfig};
pub use journal::PivotJournal;
