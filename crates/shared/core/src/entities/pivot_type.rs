use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural classification of a pivot relative to the prior swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PivotType {
    /// Higher high
    HH,
    /// Higher low
    HL,
    /// Lower high
    LH,
    /// Lower low
    LL,
}

impl PivotType {
    pub const ALL: [PivotType; 4] = [PivotType::HH, PivotType::HL, PivotType::LH, PivotType::LL];

    /// Which side of the price series this pivot marks
    pub fn direction(&self) -> Direction {
        match self {
            PivotType::HH | PivotType::LH => Direction::High,
            PivotType::HL | PivotType::LL => Direction::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PivotType::HH => "HH",
            PivotType::HL => "HL",
            PivotType::LH => "LH",
            PivotType::LL => "LL",
        }
    }
}

impl fmt::Display for PivotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotType {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HH" => Ok(PivotType::HH),
            "HL" => Ok(PivotType::HL),
            "LH" => Ok(PivotType::LH),
            "LL" => Ok(PivotType::LL),
            other => Err(other.to_string()),
        }
    }
}

/// High/low side derived from a [`PivotType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    High,
    Low,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::High => "high",
            Direction::Low => "low",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
