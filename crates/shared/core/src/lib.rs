//! Pivot Core Domain
//!
//! Pure domain types for the pivot journal.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Direction, Pivot, PivotType, RecordError};
pub use values::{DATE_FORMAT, Price, TIME_FORMAT, Timestamp};
