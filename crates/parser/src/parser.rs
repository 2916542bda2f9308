//! Shorthand parser
//!
//! Field layout after splitting on `:`:
//!
//! ```text
//! [0] TYPE   HH | HL | LH | LL, any case
//! [1] PRICE  decimal number
//! [2] DATE?  YYYY-MM-DD or DD-MM-YYYY; anything else starts the time
//! [..] TIME  remaining tokens, rejoined with ':'
//! ```

use chrono::NaiveDate;
use pivot_clock::LocalCalendar;
use pivot_core::{Pivot, PivotType, Price};
use pivot_ports::Clock;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use crate::date::classify;
use crate::error::{ParseError, Result};
use crate::time::normalize_time;

const MIN_FIELDS: usize = 3;

/// Parse one shorthand line.
///
/// `today` supplies the date when the line carries none; it is only called in
/// that case, and only once the rest of the line has validated.
pub fn parse_with_date<F>(raw: &str, today: F) -> Result<Pivot>
where
    F: FnOnce() -> NaiveDate,
{
    let fields: Vec<&str> = raw.trim().split(':').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            found: fields.len(),
        });
    }

    let pivot_type = fields[0]
        .parse::<PivotType>()
        .map_err(ParseError::UnknownType)?;
    let price = parse_price(fields[1])?;

    let (date_token, time_tokens) = match classify(fields[2]) {
        Some(shape) => (Some((shape, fields[2])), &fields[3..]),
        None => (None, &fields[2..]),
    };

    let time = normalize_time(&time_tokens.join(":"))?;
    let date = match date_token {
        Some((shape, token)) => shape.parse(token)?,
        None => today(),
    };

    Ok(Pivot::new(pivot_type, price, date, time))
}

fn parse_price(field: &str) -> Result<Price> {
    Decimal::from_str(field)
        .or_else(|_| Decimal::from_scientific(field))
        .map_err(|_| ParseError::InvalidPrice(field.to_string()))
}

/// Parser bound to a clock and a local calendar
///
/// The clock is consulted only for lines without an explicit date.
pub struct PivotParser {
    clock: Arc<dyn Clock>,
    calendar: LocalCalendar,
}

impl PivotParser {
    /// Parser using the default UTC+7 calendar
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_calendar(clock, LocalCalendar::default())
    }

    pub fn with_calendar(clock: Arc<dyn Clock>, calendar: LocalCalendar) -> Self {
        Self { clock, calendar }
    }

    pub fn calendar(&self) -> LocalCalendar {
        self.calendar
    }

    /// Parse a shorthand line into a canonical pivot
    pub fn parse(&self, raw: &str) -> Result<Pivot> {
        log::debug!("Parsing pivot input '{}'", raw);

        let result = parse_with_date(raw, || self.calendar.today(self.clock.as_ref()));

        match &result {
            Ok(pivot) => log::debug!("Parsed pivot {} ({})", pivot, pivot.direction()),
            Err(e) => log::debug!("Rejected pivot input '{}': {}", raw, e),
        }
        result
    }
}
