//! Descriptive temperature bands.
//!
//! # Invariants
//! - Bands are half-open on the upper edge: each lower edge is inclusive.
//! - Non-finite input is not special-cased; NaN fails every `<` check and lands in `Hot`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Coarse label for a Celsius reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below 0°C.
    Freezing,
    /// `[0, 10)`°C.
    Cold,
    /// `[10, 20)`°C.
    Cool,
    /// `[20, 30)`°C.
    Warm,
    /// 30°C and above.
    Hot,
}

impl TemperatureBand {
    /// Classifies a Celsius value.
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < 0.0 {
            Self::Freezing
        } else if celsius < 10.0 {
            Self::Cold
        } else if celsius < 20.0 {
            Self::Cool
        } else if celsius < 30.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Human-readable label shown in UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Freezing => "Freezing",
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}

impl Display for TemperatureBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
