//! Bilingual content resolution
//!
//! Content values are either plain (the same in every language, e.g. proper
//! nouns and URLs) or carry one rendering per supported language. The
//! resolver picks the active language's rendering and falls back to English
//! when an entry is missing; completeness is checked by content validation,
//! not here.
//!
//! UI chrome strings (button labels, fallback messages) live in a static
//! key catalog, see [`t`].

mod catalog;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::t;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    /// Language used when a localized value lacks the active one
    pub const FALLBACK: Language = Language::En;

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// The other language
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-language renderings of a value. Never empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<Language, T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Translations<T>(BTreeMap<Language, T>);

impl<T> Translations<T> {
    pub fn get(&self, lang: Language) -> Option<&T> {
        self.0.get(&lang)
    }

    /// Languages with no rendering in this table
    pub fn missing(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| !self.0.contains_key(lang))
            .collect()
    }
}

impl<T> TryFrom<BTreeMap<Language, T>> for Translations<T> {
    type Error = String;

    fn try_from(map: BTreeMap<Language, T>) -> Result<Self, Self::Error> {
        if map.is_empty() {
            return Err("localized value has no language entries".to_string());
        }
        Ok(Self(map))
    }
}

#[cfg(test)]
impl<T> FromIterator<(Language, T)> for Translations<T> {
    /// Panics when the iterator is empty
    fn from_iter<I: IntoIterator<Item = (Language, T)>>(iter: I) -> Self {
        let map: BTreeMap<Language, T> = iter.into_iter().collect();
        assert!(!map.is_empty(), "translations need at least one entry");
        Self(map)
    }
}

/// A content value that may be translated
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub enum Localized<T> {
    PerLanguage(Translations<T>),
    Plain(T),
}

impl<T> Localized<T> {
    /// Rendering for `lang`.
    ///
    /// Plain values are returned unchanged. Per-language values fall back to
    /// English, then to whichever entry exists.
    pub fn resolve(&self, lang: Language) -> &T {
        match self {
            Localized::Plain(value) => value,
            Localized::PerLanguage(translations) => translations
                .get(lang)
                .or_else(|| translations.get(Language::FALLBACK))
                .or_else(|| translations.0.values().next())
                .expect("Translations is never empty"),
        }
    }

    /// Languages missing from a per-language value; empty for plain values
    pub fn missing_languages(&self) -> Vec<Language> {
        match self {
            Localized::Plain(_) => Vec::new(),
            Localized::PerLanguage(translations) => translations.missing(),
        }
    }
}

#[cfg(test)]
impl<T> Localized<T> {
    pub fn plain(value: T) -> Self {
        Localized::Plain(value)
    }

    /// Per-language value with an entry for English and German
    pub fn bilingual(en: T, de: T) -> Self {
        Localized::PerLanguage([(Language::En, en), (Language::De, de)].into_iter().collect())
    }
}

/// Localized single string
pub type Text = Localized<String>;

/// Localized list of strings (bullet points, highlights)
pub type TextList = Localized<Vec<String>>;

impl Localized<String> {
    /// Borrowed `&str` for the active language
    pub fn text(&self, lang: Language) -> &str {
        self.resolve(lang).as_str()
    }
}

impl Localized<Vec<String>> {
    /// Borrowed items for the active language
    pub fn items(&self, lang: Language) -> &[String] {
        self.resolve(lang).as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn test_code_matches_serde_name() {
        for lang in Language::ALL {
            let parsed: Language = serde_json::from_str(&format!("\"{}\"", lang.code())).unwrap();
            assert_eq!(parsed, lang);
            assert_eq!(lang.to_string(), lang.code());
        }
        assert!(serde_json::from_str::<Language>(r#""fr""#).is_err());
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_resolve_per_language() {
        let text = Text::bilingual("Experience".to_string(), "Erfahrung".to_string());
        assert_eq!(text.text(Language::En), "Experience");
        assert_eq!(text.text(Language::De), "Erfahrung");
    }

    #[test]
    fn test_resolve_plain_is_unchanged() {
        let text = Text::plain("ACME GmbH".to_string());
        for lang in Language::ALL {
            assert_eq!(text.text(lang), "ACME GmbH");
        }
        assert!(text.missing_languages().is_empty());
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let text: Text = Localized::PerLanguage(
            [(Language::En, "Only English".to_string())].into_iter().collect(),
        );
        assert_eq!(text.text(Language::De), "Only English");
        assert_eq!(text.missing_languages(), vec![Language::De]);
    }

    #[test]
    fn test_resolve_falls_back_to_any_entry() {
        let text: Text = Localized::PerLanguage(
            [(Language::De, "Nur Deutsch".to_string())].into_iter().collect(),
        );
        assert_eq!(text.text(Language::En), "Nur Deutsch");
    }

    #[test]
    fn test_deserialize_plain_and_table() {
        let plain: Text = serde_json::from_str(r#""Berlin""#).unwrap();
        assert_eq!(plain, Text::plain("Berlin".to_string()));

        let table: Text = serde_json::from_str(r#"{"en": "Skills", "de": "Kenntnisse"}"#).unwrap();
        assert_eq!(table.text(Language::De), "Kenntnisse");

        let list: TextList = serde_json::from_str(r#"{"en": ["a", "b"], "de": ["x"]}"#).unwrap();
        assert_eq!(list.items(Language::En), &["a".to_string(), "b".to_string()]);
        assert_eq!(list.items(Language::De), &["x".to_string()]);
    }

    #[test]
    fn test_deserialize_rejects_empty_table_and_unknown_language() {
        assert!(serde_json::from_str::<Text>("{}").is_err());
        assert!(serde_json::from_str::<Text>(r#"{"fr": "Bonjour"}"#).is_err());
    }
}
