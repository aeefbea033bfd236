//! Language codes, dictionary types and the bundled translation data.
//!
//! The dictionary is a two-level map: language code -> translation key ->
//! entry. An entry is either a literal markup string, a map of video-slot
//! ids to sources, or an ordered list of gallery image paths. The data is
//! compiled into the binary from `assets/i18n.json` and consumed read-only.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Deserialize;

/// Raw dictionary data bundled at compile time.
const DICTIONARY_JSON: &str = include_str!("../assets/i18n.json");

/// The preference-store key under which the active language is persisted.
pub const LANGUAGE_PREF_KEY: &str = "language";

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Every supported language, in selector display order.
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Spanish]
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Parses a language code. Returns `None` for unsupported codes so the
    /// caller can decide between a silent no-op and a default fallback.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            _ => None,
        }
    }

    /// Label shown on the language-selector control.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Spanish => "ES",
        }
    }
}

/// One dictionary value.
///
/// The JSON data distinguishes the variants by shape: a string is markup, an
/// object maps video-slot ids to sources, an array is a gallery image list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Markup(String),
    Videos(BTreeMap<String, String>),
    Images(Vec<String>),
}

impl Entry {
    pub fn as_markup(&self) -> Option<&str> {
        match self {
            Entry::Markup(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_videos(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Entry::Videos(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_images(&self) -> Option<&[String]> {
        match self {
            Entry::Images(list) => Some(list),
            _ => None,
        }
    }
}

/// The full translation table for every supported language.
#[derive(Debug, Clone, Deserialize)]
pub struct Dictionary(HashMap<String, HashMap<String, Entry>>);

impl Dictionary {
    /// Parses the dictionary bundled into the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(DICTIONARY_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The translation table for one language, if the language has one.
    pub fn table(&self, code: &str) -> Option<&HashMap<String, Entry>> {
        self.0.get(code)
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&Entry> {
        self.table(language.code()).and_then(|table| table.get(key))
    }

    /// Markup text for `key` in `language`, or `None` when the key is
    /// absent or holds a non-markup entry.
    pub fn markup(&self, language: Language, key: &str) -> Option<&str> {
        self.lookup(language, key).and_then(Entry::as_markup)
    }
}

/// Owns the dictionary and the active language.
///
/// Applying a language to the document and persisting the choice is driven
/// by the application controller; this type only answers lookups against
/// the active language.
#[derive(Debug, Clone)]
pub struct I18n {
    dictionary: Dictionary,
    active: Language,
}

impl I18n {
    pub fn new(dictionary: Dictionary, active: Language) -> Self {
        Self { dictionary, active }
    }

    pub fn active(&self) -> Language {
        self.active
    }

    pub fn set_active(&mut self, language: Language) {
        self.active = language;
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Markup text for `key` in the active language.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.dictionary.markup(self.active, key)
    }

    /// The bridge into the gallery: the ordered image list stored under
    /// `project_key` for the active language. Misses yield an empty slice;
    /// the debug log line is the only diagnostic the lookup emits.
    pub fn gallery_images(&self, project_key: &str) -> &[String] {
        match self.dictionary.lookup(self.active, project_key) {
            Some(Entry::Images(list)) => list,
            _ => {
                debug!(
                    "no gallery image set for key '{}' in language '{}'",
                    project_key,
                    self.active.code()
                );
                &[]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_rejects_unsupported_languages() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("es"), Some(Language::Spanish));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn bundled_dictionary_parses_and_has_both_languages() {
        let dictionary = Dictionary::bundled().expect("bundled dictionary must parse");
        for language in Language::all() {
            assert!(
                dictionary.table(language.code()).is_some(),
                "missing table for {}",
                language.code()
            );
        }
    }

    #[test]
    fn entry_shapes_deserialize_by_structure() {
        let dictionary = Dictionary::from_json(
            r#"{"en": {
                "greeting": "Hi",
                "videos": {"demo": "a.mp4"},
                "shots": ["a.png", "b.png"]
            }}"#,
        )
        .unwrap();

        assert_eq!(dictionary.markup(Language::English, "greeting"), Some("Hi"));
        let videos = dictionary
            .lookup(Language::English, "videos")
            .and_then(Entry::as_videos)
            .unwrap();
        assert_eq!(videos.get("demo").map(String::as_str), Some("a.mp4"));
        let shots = dictionary
            .lookup(Language::English, "shots")
            .and_then(Entry::as_images)
            .unwrap();
        assert_eq!(shots, ["a.png", "b.png"]);
    }

    #[test]
    fn gallery_lookup_miss_is_empty_not_error() {
        let dictionary = Dictionary::from_json(r#"{"en": {}}"#).unwrap();
        let i18n = I18n::new(dictionary, Language::English);
        assert!(i18n.gallery_images("nope").is_empty());
    }
}
