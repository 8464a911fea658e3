//! FFI formatting API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose temperature conversion and display helpers to Dart via FRB.
//! - Let the UI pass its own locale tag instead of relying on process state.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.

use log::warn;
use tempfmt_core::{
    celsius_to_fahrenheit as celsius_to_fahrenheit_inner, core_version as core_version_inner,
    default_locale, fahrenheit_to_celsius as fahrenheit_to_celsius_inner,
    format_celsius as format_celsius_inner, format_fahrenheit as format_fahrenheit_inner,
    format_range as format_range_inner, format_with_locale as format_with_locale_inner,
    init_logging as init_logging_inner, temperature_description as temperature_description_inner,
    Locale,
};

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Renders a Celsius value, e.g. `21.5°C`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_celsius(value: f64) -> String {
    format_celsius_inner(value)
}

/// Renders a Fahrenheit value, e.g. `70.7°F`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_fahrenheit(value: f64) -> String {
    format_fahrenheit_inner(value)
}

#[flutter_rust_bridge::frb(sync)]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius_to_fahrenheit_inner(celsius)
}

#[flutter_rust_bridge::frb(sync)]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    fahrenheit_to_celsius_inner(fahrenheit)
}

/// Result envelope for locale-aware formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatResponse {
    /// Whether the requested locale tag was understood.
    pub ok: bool,
    /// Rendered temperature; always present, Celsius when `ok == false`.
    pub text: String,
    /// Canonical tag of the locale actually used (`C` on fallback).
    pub applied_locale: String,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

/// Renders a Celsius reading in the unit the given locale prefers.
///
/// Input semantics:
/// - `locale_tag`: e.g. `en_US`, `en-US`, `de_DE.UTF-8`; `None` uses the
///   process default locale.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
/// - Invalid tags fall back to the root locale (Celsius) with `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_with_locale(celsius: f64, locale_tag: Option<String>) -> LocaleFormatResponse {
    let resolved = match locale_tag {
        Some(tag) => Locale::parse(&tag),
        None => Ok(default_locale()),
    };

    match resolved {
        Ok(locale) => LocaleFormatResponse {
            ok: true,
            text: format_with_locale_inner(celsius, &locale),
            applied_locale: locale.to_string(),
            message: String::new(),
        },
        Err(err) => {
            warn!(
                "event=ffi_format_with_locale module=ffi status=fallback error={}",
                err
            );
            let fallback = Locale::root();
            LocaleFormatResponse {
                ok: false,
                text: format_with_locale_inner(celsius, &fallback),
                applied_locale: fallback.to_string(),
                message: format!("format_with_locale failed: {err}"),
            }
        }
    }
}

/// Renders `"<min>°C - <max>°C"`; bounds are not reordered.
#[flutter_rust_bridge::frb(sync)]
pub fn format_range(min_celsius: f64, max_celsius: f64) -> String {
    format_range_inner(min_celsius, max_celsius)
}

/// Descriptive label (`Freezing|Cold|Cool|Warm|Hot`) for a Celsius value.
#[flutter_rust_bridge::frb(sync)]
pub fn temperature_description(celsius: f64) -> String {
    temperature_description_inner(celsius).to_owned()
}
