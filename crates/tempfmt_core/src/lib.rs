//! Temperature conversion, formatting and classification.
//! Every formatting and conversion function here is pure except the
//! `*_default_locale` variants, which read the process default locale.

pub mod convert;
pub mod format;
pub mod locale;
pub mod logging;
pub mod model;

pub use convert::{celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use format::{
    format_celsius, format_decimal, format_fahrenheit, format_range, format_with_default_locale,
    format_with_locale, temperature_description,
};
pub use locale::{default_locale, reset_default_locale, set_default_locale, Locale, LocaleError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::band::TemperatureBand;
pub use model::unit::TemperatureUnit;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
