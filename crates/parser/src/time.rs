//! Time-of-day normalization
//!
//! The top-level split on `:` also splits the time, so callers rejoin the
//! remaining tokens before handing them here. Accepted after rejoining:
//!
//! - `H:M`, `H:MM`, `HH:M`, `HH:MM` (single digits are zero-padded)
//! - `H` or `HH` alone, meaning the top of the hour
//! - `HHMM` compact form

use chrono::NaiveTime;

use crate::error::{ParseError, Result};

/// Parse a rebuilt time string into a minute-precision time
pub fn normalize_time(raw: &str) -> Result<NaiveTime> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseError::MissingTime);
    }

    let invalid = || ParseError::InvalidTime(text.to_string());

    let (hour, minute) = match text.split_once(':') {
        Some((hour, minute)) => (
            pad_component(hour).ok_or_else(invalid)?,
            pad_component(minute).ok_or_else(invalid)?,
        ),
        None => split_compact(text).ok_or_else(invalid)?,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// One or two ASCII digits. A second `:` makes the minute part fail here.
fn pad_component(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn split_compact(text: &str) -> Option<(u32, u32)> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.len() {
        1 | 2 => Some((text.parse().ok()?, 0)),
        4 => Some((text[..2].parse().ok()?, text[2..].parse().ok()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_canonical() {
        assert_eq!(normalize_time("06:30"), Ok(hm(6, 30)));
        assert_eq!(normalize_time("00:00"), Ok(hm(0, 0)));
        assert_eq!(normalize_time("23:59"), Ok(hm(23, 59)));
    }

    #[test]
    fn test_single_digits_are_padded() {
        assert_eq!(normalize_time("6:5"), Ok(hm(6, 5)));
        assert_eq!(normalize_time("6:30"), Ok(hm(6, 30)));
        assert_eq!(normalize_time("06:5"), Ok(hm(6, 5)));
    }

    #[test]
    fn test_compact_forms() {
        assert_eq!(normalize_time("6"), Ok(hm(6, 0)));
        assert_eq!(normalize_time("18"), Ok(hm(18, 0)));
        assert_eq!(normalize_time("0630"), Ok(hm(6, 30)));
    }

    #[test]
    fn test_out_of_range() {
        assert!(normalize_time("24:00").is_err());
        assert!(normalize_time("12:60").is_err());
        assert!(normalize_time("2400").is_err());
        assert!(normalize_time("25").is_err());
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            normalize_time("06:30:15"),
            Err(ParseError::InvalidTime("06:30:15".to_string()))
        );
        assert!(normalize_time("630").is_err());
        assert!(normalize_time("006:30").is_err());
        assert!(normalize_time("ab:cd").is_err());
        assert!(normalize_time("06:").is_err());
        assert!(normalize_time(":30").is_err());
        assert!(normalize_time("2025-03-23").is_err());
    }

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(normalize_time(""), Err(ParseError::MissingTime));
        assert_eq!(normalize_time("  "), Err(ParseError::MissingTime));
    }
}
