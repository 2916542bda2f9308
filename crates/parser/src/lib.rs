//! Pivot Shorthand Parser
//!
//! Accepts the compact notation traders type for a swing point and turns it
//! into a canonical [`Pivot`](pivot_core::Pivot):
//!
//! ```text
//! TYPE:PRICE:TIME              LL:83597:06:30       (date = today, UTC+7)
//! TYPE:PRICE:DATE:TIME         LL:79894:2025-03-23:00:30
//!                              HH:100:23-03-2025:06:30
//! ```
//!
//! ## Modules
//!
//! - `date`: classifies the token after the price as a date (or not)
//! - `time`: rebuilds and validates the time-of-day
//! - `parser`: ties the fields together

pub mod date;
pub mod error;
pub mod parser;
pub mod time;

pub use date::{DateShape, classify, looks_like_dmy, looks_like_ymd};
pub use error::{ParseError, Result};
pub use parser::{PivotParser, parse_with_date};
pub use time::normalize_time;
