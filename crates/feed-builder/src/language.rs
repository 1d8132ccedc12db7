//! Channel language codes

use std::fmt;

/// Common feed languages, rendered as ISO 639-1 codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Arabic,
    Chinese,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Hindi,
    Italian,
    Japanese,
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    /// Returns all supported languages
    pub fn all() -> Vec<Self> {
        vec![
            Self::Arabic,
            Self::Chinese,
            Self::Danish,
            Self::Dutch,
            Self::English,
            Self::Finnish,
            Self::French,
            Self::German,
            Self::Hindi,
            Self::Italian,
            Self::Japanese,
            Self::Korean,
            Self::Norwegian,
            Self::Polish,
            Self::Portuguese,
            Self::Russian,
            Self::Spanish,
            Self::Swedish,
            Self::Turkish,
        ]
    }

    /// Returns the ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Chinese => "zh",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Hindi => "hi",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::Portuguese => "pt",
            Self::Russian => "ru",
            Self::Spanish => "es",
            Self::Swedish => "sv",
            Self::Turkish => "tr",
        }
    }

    /// Looks up a language by code, ignoring case and any region suffix
    /// (`en-US` → English)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_lowercase();
        Self::all().into_iter().find(|lang| lang.code() == primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
