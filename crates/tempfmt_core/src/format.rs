//! Human-readable temperature rendering.
//!
//! # Responsibility
//! - Render values with at most one fractional digit and a unit suffix.
//! - Pick Celsius or Fahrenheit display from a locale.
//! - Map Celsius readings to descriptive labels.
//!
//! # Invariants
//! - Rounding is half-to-even on the exact binary value of the input.
//! - A trailing `.0` is never rendered; the leading `0` of `0.x` always is.
//! - Every function is total: NaN and infinities render as `NaN`, `inf`, `-inf`.
//!   Infinities use Rust's float notation rather than the `∞` sign some
//!   decimal formatters print.

use crate::convert::celsius_to_fahrenheit;
use crate::locale::{default_locale, Locale};
use crate::model::band::TemperatureBand;
use crate::model::unit::TemperatureUnit;

/// Renders `value` with at most one fractional digit, without unit.
///
/// `20.0` -> `"20"`, `20.5` -> `"20.5"`, `20.04` -> `"20"`, `20.25` -> `"20.2"`.
/// Negative values that round to zero keep their sign (`-0.04` -> `"-0"`).
pub fn format_decimal(value: f64) -> String {
    let rendered = format!("{value:.1}");
    match rendered.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rendered,
    }
}

/// Renders a Celsius value, e.g. `"21.5°C"`.
pub fn format_celsius(value: f64) -> String {
    TemperatureUnit::Celsius.format(value)
}

/// Renders a Fahrenheit value, e.g. `"70.7°F"`.
pub fn format_fahrenheit(value: f64) -> String {
    TemperatureUnit::Fahrenheit.format(value)
}

/// Renders a Celsius reading in the unit `locale` prefers.
///
/// The United States locale gets the converted Fahrenheit value; every other
/// locale gets Celsius unchanged.
pub fn format_with_locale(celsius: f64, locale: &Locale) -> String {
    match locale.preferred_unit() {
        TemperatureUnit::Fahrenheit => format_fahrenheit(celsius_to_fahrenheit(celsius)),
        TemperatureUnit::Celsius => format_celsius(celsius),
    }
}

/// Same as [`format_with_locale`] using the process default locale.
///
/// Output depends on ambient state; prefer the explicit variant where
/// reproducibility matters.
pub fn format_with_default_locale(celsius: f64) -> String {
    format_with_locale(celsius, &default_locale())
}

/// Renders a Celsius range as `"<min>°C - <max>°C"`.
///
/// Bounds are not reordered or validated.
pub fn format_range(min_celsius: f64, max_celsius: f64) -> String {
    format!(
        "{}°C - {}°C",
        format_decimal(min_celsius),
        format_decimal(max_celsius)
    )
}

/// Descriptive label for a Celsius reading: `Freezing`, `Cold`, `Cool`, `Warm` or `Hot`.
pub fn temperature_description(celsius: f64) -> &'static str {
    TemperatureBand::from_celsius(celsius).label()
}

#[cfg(test)]
mod tests {
    use super::{
        format_celsius, format_decimal, format_fahrenheit, format_range, format_with_locale,
        temperature_description,
    };
    use crate::locale::Locale;

    #[test]
    fn format_decimal_drops_trailing_zero() {
        assert_eq!(format_decimal(20.0), "20");
        assert_eq!(format_decimal(20.5), "20.5");
        assert_eq!(format_decimal(20.04), "20");
        assert_eq!(format_decimal(19.96), "20");
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(-3.25), "-3.2");
    }

    #[test]
    fn format_decimal_rounds_ties_to_even() {
        assert_eq!(format_decimal(20.25), "20.2");
        assert_eq!(format_decimal(20.75), "20.8");
        // 0.15 is stored slightly below the tie.
        assert_eq!(format_decimal(0.15), "0.1");
    }

    #[test]
    fn format_decimal_keeps_sign_of_small_negatives() {
        assert_eq!(format_decimal(-0.04), "-0");
        assert_eq!(format_decimal(-0.06), "-0.1");
    }

    #[test]
    fn format_decimal_renders_non_finite_values() {
        assert_eq!(format_decimal(f64::NAN), "NaN");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn unit_suffixes_are_appended() {
        assert_eq!(format_celsius(20.0), "20°C");
        assert_eq!(format_celsius(20.5), "20.5°C");
        assert_eq!(format_fahrenheit(98.6), "98.6°F");
    }

    #[test]
    fn format_with_locale_switches_on_us() {
        assert_eq!(format_with_locale(0.0, &Locale::us()), "32°F");
        assert_eq!(format_with_locale(21.5, &Locale::us()), "70.7°F");
        assert_eq!(format_with_locale(0.0, &Locale::new("de", Some("DE"))), "0°C");
        assert_eq!(format_with_locale(0.0, &Locale::root()), "0°C");
    }

    #[test]
    fn format_range_does_not_validate_order() {
        assert_eq!(format_range(-5.0, 10.0), "-5°C - 10°C");
        assert_eq!(format_range(12.34, 3.0), "12.3°C - 3°C");
    }

    #[test]
    fn description_bands_follow_lower_edges() {
        assert_eq!(temperature_description(-0.1), "Freezing");
        assert_eq!(temperature_description(0.0), "Cold");
        assert_eq!(temperature_description(9.999), "Cold");
        assert_eq!(temperature_description(10.0), "Cool");
        assert_eq!(temperature_description(25.0), "Warm");
        assert_eq!(temperature_description(30.0), "Hot");
        assert_eq!(temperature_description(f64::NAN), "Hot");
    }
}
