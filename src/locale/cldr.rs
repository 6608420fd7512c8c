//! Embedded CLDR-derived convention tables backing the default
//! [`LocaleDataSource`]. Covers the locales the settings form offers;
//! anything else falls back through the policy layer's defaults.

use super::{Language, LocaleDataSource};

pub struct CldrData;

/// Locale identifiers with convention data.
const SUPPORTED_LOCALES: &[&str] = &[
    "ar", "ar_AE", "ar_EG", "ar_SA", "cs", "cs_CZ", "da", "da_DK", "de", "de_AT", "de_CH",
    "de_DE", "en", "en_AU", "en_CA", "en_GB", "en_IN", "en_NZ", "en_US", "en_ZA", "es", "es_AR",
    "es_CO", "es_ES", "es_MX", "eu", "eu_ES", "fa", "fa_IR", "fi", "fi_FI", "fr", "fr_BE",
    "fr_CA", "fr_CH", "fr_FR", "he", "he_IL", "hi", "hi_IN", "id", "id_ID", "it", "it_CH",
    "it_IT", "ja", "ja_JP", "ko", "ko_KR", "nb", "nb_NO", "nl", "nl_BE", "nl_NL", "pl", "pl_PL",
    "pt", "pt_BR", "pt_PT", "ru", "ru_RU", "sk", "sk_SK", "sv", "sv_SE", "th", "th_TH", "tr",
    "tr_TR", "uk", "uk_UA", "zh", "zh_CN", "zh_HK", "zh_TW",
];

/// Territories whose week begins on Sunday (CLDR weekData).
const SUNDAY_FIRST: &[&str] = &[
    "AU", "BR", "CA", "CN", "CO", "HK", "IL", "IN", "ID", "JP", "KR", "MX", "PE", "PH", "PT",
    "TH", "TW", "US", "ZA",
];

/// Territories whose week begins on Saturday.
const SATURDAY_FIRST: &[&str] = &[
    "AE", "BH", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SA", "SD", "SY", "YE",
];

/// Default territory per bare language code, for identifiers without a
/// country part.
const DEFAULT_TERRITORIES: &[(&str, &str)] = &[
    ("ar", "SA"),
    ("en", "US"),
    ("fa", "IR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("id", "ID"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("pt", "BR"),
    ("th", "TH"),
    ("zh", "CN"),
];

/// Languages that write the percent sign before the number.
const PERCENT_BEFORE: &[&str] = &["eu", "tr"];

/// Languages that separate the number and the sign with a no-break space.
const PERCENT_SPACED: &[&str] = &["cs", "da", "de", "fi", "fr", "nb", "pl", "ru", "sk", "sv", "uk"];

const LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
    ("zh", "Chinese"),
];

impl LocaleDataSource for CldrData {
    fn is_supported(&self, locale: &str) -> bool {
        SUPPORTED_LOCALES.contains(&locale)
    }

    fn first_day_of_week(&self, locale: &str) -> u32 {
        let territory = match locale.split_once('_') {
            Some((_, territory)) => territory,
            None => DEFAULT_TERRITORIES
                .iter()
                .find(|(language, _)| *language == locale)
                .map(|(_, territory)| *territory)
                .unwrap_or(""),
        };

        if SATURDAY_FIRST.contains(&territory) {
            6
        } else if SUNDAY_FIRST.contains(&territory) {
            7
        } else {
            1
        }
    }

    fn format_percent(&self, locale: &str, value: i64) -> String {
        let language = locale.split('_').next().unwrap_or(locale);
        if PERCENT_BEFORE.contains(&language) {
            format!("%{value}")
        } else if PERCENT_SPACED.contains(&language) {
            format!("{value}\u{a0}%")
        } else {
            format!("{value}%")
        }
    }

    fn supported_languages(&self) -> Vec<Language> {
        LANGUAGES
            .iter()
            .map(|(code, name)| Language {
                code: (*code).to_string(),
                name: (*name).to_string(),
            })
            .collect()
    }
}
