//! Parser errors

use thiserror::Error;

/// Why a shorthand line produced no pivot
///
/// Every variant means the same thing to callers: nothing was recorded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected at least 3 colon-separated fields, found {found}")]
    TooFewFields { found: usize },

    #[error("Unknown pivot type '{0}' (expected HH, HL, LH or LL)")]
    UnknownType(String),

    #[error("Invalid price '{0}'")]
    InvalidPrice(String),

    #[error("Invalid calendar date '{0}'")]
    InvalidDate(String),

    #[error("Missing time after date")]
    MissingTime,

    #[error("Invalid time '{0}' (expected HH:MM)")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
