//! Date token classification
//!
//! The token after the price is either an explicit date or the start of the
//! time. Only two date layouts count as dates; anything else is handed to the
//! time parser.

use chrono::NaiveDate;

use crate::error::{ParseError, Result};

/// Layout of an explicit date token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `2025-03-23`
    YearMonthDay,
    /// `23-03-2025`
    DayMonthYear,
}

/// `\d{4}-\d{2}-\d{2}`
pub fn looks_like_ymd(token: &str) -> bool {
    matches_digit_groups(token, [4, 2, 2])
}

/// `\d{2}-\d{2}-\d{4}`
pub fn looks_like_dmy(token: &str) -> bool {
    matches_digit_groups(token, [2, 2, 4])
}

/// Decide whether `token` is an explicit date, and in which layout
pub fn classify(token: &str) -> Option<DateShape> {
    if looks_like_ymd(token) {
        Some(DateShape::YearMonthDay)
    } else if looks_like_dmy(token) {
        Some(DateShape::DayMonthYear)
    } else {
        None
    }
}

impl DateShape {
    /// Read a token already classified as this shape.
    ///
    /// Fails when the digits do not name a real calendar day (`2025-02-30`).
    pub fn parse(&self, token: &str) -> Result<NaiveDate> {
        let mut parts = token.split('-').map(|p| p.parse::<u32>());
        let (a, b, c) = match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(a)), Some(Ok(b)), Some(Ok(c))) => (a, b, c),
            _ => return Err(ParseError::InvalidDate(token.to_string())),
        };

        let (year, month, day) = match self {
            DateShape::YearMonthDay => (a, b, c),
            DateShape::DayMonthYear => (c, b, a),
        };

        i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(|| ParseError::InvalidDate(token.to_string()))
    }
}

fn matches_digit_groups(token: &str, widths: [usize; 3]) -> bool {
    let groups: Vec<&str> = token.split('-').collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| group.len() == width && group.bytes().all(|b| b.is_ascii_digit()))
}
