//! Temperature unit model.
//!
//! # Responsibility
//! - Name the two supported scales and their display suffixes.
//! - Route unit-to-unit conversion through the canonical formulas.
//!
//! # Invariants
//! - Only Celsius and Fahrenheit exist; no Kelvin or Rankine.
//! - Converting to the same unit returns the input unchanged.

use crate::convert::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use crate::format::format_decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Scale a temperature value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    /// Degrees Celsius, suffix `°C`.
    Celsius,
    /// Degrees Fahrenheit, suffix `°F`.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Display suffix appended after the rendered number.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Renders `value` (already in this unit) with the one-decimal rule and suffix.
    pub fn format(self, value: f64) -> String {
        format!("{}{}", format_decimal(value), self.symbol())
    }

    /// Converts `value` from this unit into `target`.
    ///
    /// No rounding is applied; full `f64` precision is preserved.
    pub fn convert(self, value: f64, target: TemperatureUnit) -> f64 {
        match (self, target) {
            (Self::Celsius, Self::Fahrenheit) => celsius_to_fahrenheit(value),
            (Self::Fahrenheit, Self::Celsius) => fahrenheit_to_celsius(value),
            _ => value,
        }
    }
}

impl Display for TemperatureUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
