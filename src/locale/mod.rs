//! Locale policy layer: resolves a company's language/country pair into
//! formatting conventions (week start, percent-sign placement, fiscal
//! defaults). Locale facts themselves come from a [`LocaleDataSource`];
//! this module only selects and combines them.

pub mod cldr;

pub use cldr::CldrData;

use serde::Serialize;

use crate::models::enums::WeekStart;

/// A language the translation catalog ships strings for.
#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Locale, calendar, and formatting facts consumed by the policy layer.
/// Injected so handlers and tests can substitute their own source.
pub trait LocaleDataSource: Send + Sync {
    /// Whether the identifier names a locale the source has data for.
    fn is_supported(&self, locale: &str) -> bool;

    /// First day of the current week for the locale, as an ISO day-of-week
    /// number (1 = Monday .. 7 = Sunday), per the locale's own convention.
    fn first_day_of_week(&self, locale: &str) -> u32;

    /// Render `value` as a percentage under the locale's conventions.
    fn format_percent(&self, locale: &str, value: i64) -> String;

    /// Languages the translation catalog supports.
    fn supported_languages(&self) -> Vec<Language>;
}

/// Compose `language_COUNTRY` and return it if the source knows it,
/// otherwise fall back to the bare language identifier. Not every language
/// has data for every country; the fallback always resolves.
pub fn resolve_locale(source: &dyn LocaleDataSource, language: &str, country_code: &str) -> String {
    let compound = format!("{language}_{country_code}");
    if source.is_supported(&compound) {
        compound
    } else {
        language.to_string()
    }
}

/// Week start for the locale, defaulting when the source reports a day
/// number outside the ISO range.
pub fn resolve_week_start(source: &dyn LocaleDataSource, locale: &str) -> WeekStart {
    WeekStart::from_iso(source.first_day_of_week(locale)).unwrap_or(WeekStart::DEFAULT)
}

/// Whether the locale writes the percent sign before the number. Probes the
/// formatter with a fixed value and inspects where the sign landed, so any
/// locale the source can format is handled without a lookup table here.
pub fn is_percent_first(source: &dyn LocaleDataSource, language: &str, country_code: &str) -> bool {
    let formatted = source.format_percent(&format!("{language}_{country_code}"), 25);
    match (formatted.find('%'), formatted.find("25")) {
        (Some(sign), Some(digits)) => sign < digits,
        _ => false,
    }
}
