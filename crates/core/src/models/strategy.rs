use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A named investment strategy preset.
/// Selecting one sets the annual rate to its `current` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Low-risk instruments, 5–8% a year
    Conservative,
    /// Mixed portfolio, 10–15% a year
    #[default]
    Balanced,
    /// Growth-oriented, 15–25% a year
    Aggressive,
}

/// Annual rate band for a strategy, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,

    /// Rate applied when the strategy is selected
    pub current: f64,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Conservative,
        Strategy::Balanced,
        Strategy::Aggressive,
    ];

    #[must_use]
    pub fn rate_range(&self) -> RateRange {
        match self {
            Strategy::Conservative => RateRange {
                min: 5.0,
                max: 8.0,
                current: 6.0,
            },
            Strategy::Balanced => RateRange {
                min: 10.0,
                max: 15.0,
                current: 12.0,
            },
            Strategy::Aggressive => RateRange {
                min: 15.0,
                max: 25.0,
                current: 18.0,
            },
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Conservative => write!(f, "conservative"),
            Strategy::Balanced => write!(f, "balanced"),
            Strategy::Aggressive => write!(f, "aggressive"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(Strategy::Conservative),
            "balanced" => Ok(Strategy::Balanced),
            "aggressive" => Ok(Strategy::Aggressive),
            _ => Err(CoreError::UnknownStrategy(s.to_string())),
        }
    }
}
