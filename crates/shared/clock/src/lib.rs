//! Pivot Clock Infrastructure
//!
//! Time sources for the parser and the journal:
//!
//! - [`SystemClock`]: wall time, for production
//! - [`FixedClock`]: frozen time that only moves when told to, for tests
//! - [`LocalCalendar`]: turns any clock reading into a local date/time for a
//!   fixed UTC offset (UTC+7 by default)
//!
//! ## Usage
//!
//! ```ignore
//! use pivot_clock::{FixedClock, LocalCalendar};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 22, 18, 0, 0).unwrap());
//! let calendar = LocalCalendar::default();
//! assert_eq!(calendar.today(&clock).to_string(), "2025-03-23");
//! ```

mod calendar;
mod fixed;
mod system;

pub use calendar::LocalCalendar;
pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use pivot_ports::Clock;
