use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{Direction, PivotType};
use crate::values::{DATE_FORMAT, Price, TIME_FORMAT};

/// A persisted record that cannot be turned back into a [`Pivot`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Direction '{direction}' disagrees with pivot type {pivot_type}")]
    DirectionMismatch {
        pivot_type: PivotType,
        direction: Direction,
    },
}

/// Canonical pivot record
///
/// The direction is never stored on the struct; it is always derived from
/// `pivot_type`, so the two cannot disagree. It is written out alongside the
/// other fields when the record is serialized.
///
/// Fields are read-only: a pivot is built by [`Pivot::new`] or decoded from a
/// stored record, so `time` always has minute precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PivotRecord", into = "PivotRecord")]
pub struct Pivot {
    pivot_type: PivotType,
    price: Price,
    /// Local (market time zone) calendar date
    date: NaiveDate,
    /// Local time-of-day, minute precision
    time: NaiveTime,
    confirmed: bool,
}

impl Pivot {
    /// Create a confirmed pivot. Seconds are dropped from `time`.
    pub fn new(pivot_type: PivotType, price: Price, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            pivot_type,
            price,
            date,
            time: truncate_to_minute(time),
            confirmed: true,
        }
    }

    pub fn pivot_type(&self) -> PivotType {
        self.pivot_type
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Always true for pivots built here; stored records keep their own flag
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn direction(&self) -> Direction {
        self.pivot_type.direction()
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// `HH:MM`
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Canonical shorthand: `TYPE:PRICE:YYYY-MM-DD:HH:MM`
impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.pivot_type,
            self.price,
            self.date_string(),
            self.time_string()
        )
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// On-disk shape of a pivot
#[derive(Serialize, Deserialize)]
struct PivotRecord {
    #[serde(rename = "type")]
    pivot_type: PivotType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Price,
    vn_time: String,
    vn_date: String,
    direction: Direction,
    confirmed: bool,
}

impl From<Pivot> for PivotRecord {
    fn from(pivot: Pivot) -> Self {
        Self {
            pivot_type: pivot.pivot_type,
            price: pivot.price,
            vn_time: pivot.time_string(),
            vn_date: pivot.date_string(),
            direction: pivot.direction(),
            confirmed: pivot.confirmed,
        }
    }
}

impl TryFrom<PivotRecord> for Pivot {
    type Error = RecordError;

    fn try_from(record: PivotRecord) -> Result<Self, Self::Error> {
        if record.direction != record.pivot_type.direction() {
            return Err(RecordError::DirectionMismatch {
                pivot_type: record.pivot_type,
                direction: record.direction,
            });
        }

        let date = NaiveDate::parse_from_str(&record.vn_date, DATE_FORMAT)
            .map_err(|_| RecordError::InvalidDate(record.vn_date.clone()))?;
        let time = NaiveTime::parse_from_str(&record.vn_time, TIME_FORMAT)
            .map_err(|_| RecordError::InvalidTime(record.vn_time.clone()))?;

        Ok(Self {
            pivot_type: record.pivot_type,
            price: record.price,
            date,
            time,
            confirmed: record.confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Pivot {
        Pivot::new(
            PivotType::LL,
            dec!(79894),
            NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
            NaiveTime::from_hms_opt(0, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_is_confirmed() {
        let pivot = sample();
        assert!(pivot.is_confirmed());
        assert_eq!(pivot.direction(), Direction::Low);
    }

    #[test]
    fn test_new_drops_seconds() {
        let pivot = Pivot::new(
            PivotType::HH,
            dec!(1),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(14, 5, 59).unwrap(),
        );
        assert_eq!(pivot.time(), NaiveTime::from_hms_opt(14, 5, 0).unwrap());
    }

    #[test]
    fn test_display_is_shorthand() {
        assert_eq!(sample().to_string(), "LL:79894:2025-03-23:00:30");
    }

    #[test]
    fn test_serialize_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "LL",
                "price": 79894,
                "vn_time": "00:30",
                "vn_date": "2025-03-23",
                "direction": "low",
                "confirmed": true
            })
        );
    }

    #[test]
    fn test_deserialize_integer_price() {
        let json = r#"{"type":"HH","price":100,"vn_time":"06:30","vn_date":"2025-03-23","direction":"high","confirmed":true}"#;
        let pivot: Pivot = serde_json::from_str(json).unwrap();
        assert_eq!(pivot.price(), dec!(100));
        assert_eq!(pivot.pivot_type(), PivotType::HH);
    }

    #[test]
    fn test_deserialize_rejects_direction_mismatch() {
        let json = r#"{"type":"HH","price":1.0,"vn_time":"06:30","vn_date":"2025-03-23","direction":"low","confirmed":true}"#;
        assert!(serde_json::from_str::<Pivot>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"type":"LL","price":1.0,"vn_time":"06:30","vn_date":"23-03-2025","direction":"low","confirmed":true}"#;
        assert!(serde_json::from_str::<Pivot>(json).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let pivot = Pivot::new(
            PivotType::LH,
            dec!(83597.25),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
        );
        let json = serde_json::to_string(&pivot).unwrap();
        let back: Pivot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pivot);
    }

    #[test]
    fn test_price_beyond_f64_digits_survives_json() {
        let pivot = Pivot::new(
            PivotType::HL,
            dec!(79894.123456789012345),
            NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
        );
        let json = serde_json::to_string(&pivot).unwrap();
        assert!(json.contains("\"price\":79894.123456789012345"));

        let back: Pivot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price(), dec!(79894.123456789012345));
        assert_eq!(back, pivot);
    }

    #[test]
    fn test_stored_unconfirmed_flag_is_kept() {
        let json = r#"{"type":"LL","price":5,"vn_time":"06:30","vn_date":"2025-03-23","direction":"low","confirmed":false}"#;
        let pivot: Pivot = serde_json::from_str(json).unwrap();
        assert!(!pivot.is_confirmed());
        assert_eq!(pivot.time_string(), "06:30");
    }
}
