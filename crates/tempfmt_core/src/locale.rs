//! Locale tags and the process-wide default locale.
//!
//! # Responsibility
//! - Parse POSIX (`en_US.UTF-8@euro`) and dash-separated (`en-US`) locale tags.
//! - Decide which temperature unit a locale prefers.
//! - Hold the process default consulted by ambient formatting calls.
//!
//! # Invariants
//! - Only the exact United States locale (`en` + `US`, no variant) prefers Fahrenheit.
//! - The environment is read at most once per process; overrides never touch it.
//! - Reading or replacing the default never panics, even after lock poisoning.

use crate::model::unit::TemperatureUnit;
use log::{debug, info, warn};
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock};

/// Environment variables consulted for the ambient locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

const ROOT_TAG: &str = "C";

static LOCALE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<language>[A-Za-z]{2,8})(?:[_-](?P<region>[A-Za-z]{2}|[0-9]{3}))?(?:\.[A-Za-z0-9_-]+)?(?:@(?P<variant>[A-Za-z0-9_-]+))?$",
    )
    .expect("valid locale tag regex")
});

static ENV_LOCALE: OnceCell<Locale> = OnceCell::new();
static LOCALE_OVERRIDE: Lazy<RwLock<Option<Locale>>> = Lazy::new(|| RwLock::new(None));

/// Error returned when a locale tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    Empty,
    Malformed(String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "locale tag must not be empty"),
            Self::Malformed(tag) => write!(
                f,
                "locale tag is malformed: `{tag}` (expected language[_REGION][.encoding][@variant])"
            ),
        }
    }
}

impl Error for LocaleError {}

/// Language/region pair that drives unit selection.
///
/// Serialized as its canonical tag string (`en_US`, `de_DE@euro`, `C`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Creates a locale from already-separated parts.
    ///
    /// Language is lowercased and region uppercased; no further validation.
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
            variant: None,
        }
    }

    /// The United States locale (`en_US`).
    pub fn us() -> Self {
        Self::new("en", Some("US"))
    }

    /// Locale with no language or region (`C`/`POSIX`).
    pub fn root() -> Self {
        Self {
            language: String::new(),
            region: None,
            variant: None,
        }
    }

    /// Parses a locale tag.
    ///
    /// Accepts `en_US`, `en-US`, `en_US.UTF-8`, `de_DE@euro`, `fr`, and the
    /// special tags `C` and `POSIX` (root locale). Encoding is discarded.
    ///
    /// # Errors
    /// - `LocaleError::Empty` for blank input.
    /// - `LocaleError::Malformed` when the tag does not match the grammar above.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }
        let base = trimmed.split('.').next().unwrap_or(trimmed);
        if base == "C" || base == "POSIX" {
            return Ok(Self::root());
        }

        let captures = LOCALE_TAG_RE
            .captures(trimmed)
            .ok_or_else(|| LocaleError::Malformed(trimmed.to_string()))?;
        let language = captures
            .name("language")
            .map(|m| m.as_str().to_ascii_lowercase())
            .ok_or_else(|| LocaleError::Malformed(trimmed.to_string()))?;

        Ok(Self {
            language,
            region: captures
                .name("region")
                .map(|m| m.as_str().to_ascii_uppercase()),
            variant: captures.name("variant").map(|m| m.as_str().to_string()),
        })
    }

    /// Resolves the ambient locale from the process environment.
    ///
    /// See [`Locale::from_lookup`] for the resolution rules.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves a locale through `lookup`, consulting [`LOCALE_ENV_VARS`] in order.
    ///
    /// The first non-empty value wins. An unparseable value falls back to the
    /// root locale instead of trying lower-priority variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in LOCALE_ENV_VARS {
            let Some(value) = lookup(key) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            return match Self::parse(&value) {
                Ok(locale) => {
                    debug!(
                        "event=locale_resolve module=locale status=ok source={} locale={}",
                        key, locale
                    );
                    locale
                }
                Err(err) => {
                    warn!(
                        "event=locale_resolve module=locale status=fallback source={} error={}",
                        key, err
                    );
                    Self::root()
                }
            };
        }
        debug!("event=locale_resolve module=locale status=fallback source=none locale=C");
        Self::root()
    }

    /// Lowercase language subtag; empty for the root locale.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// POSIX `@modifier`, if any.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Returns whether this is exactly the United States locale.
    pub fn is_us(&self) -> bool {
        self.language == "en" && self.region.as_deref() == Some("US") && self.variant.is_none()
    }

    /// Unit this locale displays temperatures in.
    pub fn preferred_unit(&self) -> TemperatureUnit {
        if self.is_us() {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.language.is_empty() {
            return f.write_str(ROOT_TAG);
        }
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "@{variant}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.to_string()
    }
}

/// Returns the process default locale.
///
/// An explicit override set by [`set_default_locale`] wins; otherwise the
/// environment locale, resolved once on first use.
pub fn default_locale() -> Locale {
    let guard = LOCALE_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(locale) = guard.as_ref() {
        return locale.clone();
    }
    drop(guard);
    ENV_LOCALE.get_or_init(Locale::from_env).clone()
}

/// Replaces the process default locale for subsequent ambient calls.
pub fn set_default_locale(locale: Locale) {
    info!(
        "event=default_locale_set module=locale status=ok locale={}",
        locale
    );
    *LOCALE_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(locale);
}

/// Drops any override so the environment locale applies again.
pub fn reset_default_locale() {
    info!("event=default_locale_reset module=locale status=ok");
    *LOCALE_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}

#[cfg(test)]
mod tests {
    use super::{Locale, LocaleError};
    use crate::model::unit::TemperatureUnit;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn parse_accepts_posix_and_dash_forms() {
        let posix = Locale::parse("en_US.UTF-8").expect("posix tag should parse");
        assert_eq!(posix, Locale::us());

        let dashed = Locale::parse("en-us").expect("dashed tag should parse");
        assert_eq!(dashed, Locale::us());

        let language_only = Locale::parse("fr").expect("language-only tag should parse");
        assert_eq!(language_only.language(), "fr");
        assert_eq!(language_only.region(), None);
    }

    #[test]
    fn parse_keeps_modifier_as_variant() {
        let locale = Locale::parse("de_DE.ISO-8859-15@euro").expect("modifier tag should parse");
        assert_eq!(locale.region(), Some("DE"));
        assert_eq!(locale.variant(), Some("euro"));
        assert_eq!(locale.to_string(), "de_DE@euro");
    }

    #[test]
    fn parse_maps_c_and_posix_to_root() {
        assert_eq!(Locale::parse("C").expect("C should parse"), Locale::root());
        assert_eq!(Locale::parse("C.UTF-8").expect("C.UTF-8 should parse"), Locale::root());
        assert_eq!(Locale::parse("POSIX").expect("POSIX should parse"), Locale::root());
        assert_eq!(Locale::root().to_string(), "C");
    }

    #[test]
    fn parse_rejects_blank_and_malformed_tags() {
        assert_eq!(Locale::parse("  "), Err(LocaleError::Empty));
        let err = Locale::parse("en_US_extra!").expect_err("garbage must be rejected");
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn only_exact_us_prefers_fahrenheit() {
        assert!(Locale::us().is_us());
        assert_eq!(Locale::us().preferred_unit(), TemperatureUnit::Fahrenheit);

        for tag in ["es_US", "en_GB", "en", "en_US@posix", "C"] {
            let locale = Locale::parse(tag).expect("tag should parse");
            assert!(!locale.is_us(), "{tag} must not count as US");
            assert_eq!(locale.preferred_unit(), TemperatureUnit::Celsius);
        }
    }

    #[test]
    fn from_lookup_respects_priority_and_skips_empty_values() {
        let locale = Locale::from_lookup(lookup_from(&[
            ("LC_ALL", ""),
            ("LC_CTYPE", "en_US.UTF-8"),
            ("LANG", "de_DE.UTF-8"),
        ]));
        assert_eq!(locale, Locale::us());
    }

    #[test]
    fn from_lookup_falls_back_to_root() {
        assert_eq!(Locale::from_lookup(lookup_from(&[])), Locale::root());
        assert_eq!(
            Locale::from_lookup(lookup_from(&[("LC_ALL", "???"), ("LANG", "en_US")])),
            Locale::root()
        );
    }
}
