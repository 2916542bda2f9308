use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Canonical textual form of a pivot date (`2025-03-23`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical textual form of a pivot time (`06:30`)
pub const TIME_FORMAT: &str = "%H:%M";
