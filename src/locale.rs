use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display languages the site is served in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
    Fr,
    Es,
    Ar,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::Tr,
        Locale::En,
        Locale::Fr,
        Locale::Es,
        Locale::Ar,
        Locale::Ru,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::Ar => "ar",
            Locale::Ru => "ru",
        }
    }

    /// Pick the first supported language out of an `Accept-Language` header.
    ///
    /// Quality values are ignored; only the two-letter prefix of each entry is
    /// considered. Malformed input never fails, it just yields `None`.
    pub fn from_accept_language(header: &str) -> Option<Locale> {
        for entry in header.split(',') {
            let tag = entry.split(';').next().unwrap_or("").trim();
            let Some(prefix) = tag.get(..2) else {
                continue;
            };
            if let Ok(locale) = prefix.to_ascii_lowercase().parse() {
                return Some(locale);
            }
        }
        None
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Locale::Tr),
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            "es" => Ok(Locale::Es),
            "ar" => Ok(Locale::Ar),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// A translatable text field.
///
/// Stored canonically as a map of locale code to text. Legacy records persist
/// these fields as a single plain string, so both shapes deserialize; write
/// paths call [`LocalizedText::normalize`] to converge on the map shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum LocalizedText {
    Map(BTreeMap<String, String>),
    Plain(String),
}

impl LocalizedText {
    /// Resolve the text for `locale`, falling back to `default`, then to any
    /// available translation, then to the empty string. Plain strings resolve
    /// to themselves for every locale.
    pub fn resolve(&self, locale: Locale, default: Locale) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Map(map) => map
                .get(locale.as_str())
                .or_else(|| map.get(default.as_str()))
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Convert a legacy plain string into the map shape, keyed by `default`.
    pub fn normalize(&mut self, default: Locale) {
        if let LocalizedText::Plain(text) = self {
            let mut map = BTreeMap::new();
            map.insert(default.as_str().to_string(), std::mem::take(text));
            *self = LocalizedText::Map(map);
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, LocalizedText::Plain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_picks_first_supported() {
        let locale = Locale::from_accept_language("fr-FR,fr;q=0.9,en;q=0.8");
        assert_eq!(locale, Some(Locale::Fr));
    }

    #[test]
    fn accept_language_skips_unsupported_entries() {
        let locale = Locale::from_accept_language("de-DE,de;q=0.9,ru;q=0.5");
        assert_eq!(locale, Some(Locale::Ru));
    }

    #[test]
    fn accept_language_no_match() {
        assert_eq!(Locale::from_accept_language("de,it"), None);
    }

    #[test]
    fn accept_language_malformed_never_panics() {
        assert_eq!(Locale::from_accept_language(""), None);
        assert_eq!(Locale::from_accept_language(";;;,,,"), None);
        assert_eq!(Locale::from_accept_language("x"), None);
        assert_eq!(Locale::from_accept_language("*;q=garbage"), None);
        // Multibyte input must not slice across a char boundary.
        assert_eq!(Locale::from_accept_language("ğü,en"), Some(Locale::En));
    }

    #[test]
    fn accept_language_case_insensitive() {
        assert_eq!(Locale::from_accept_language("EN-us"), Some(Locale::En));
    }

    #[test]
    fn plain_text_resolves_for_any_locale() {
        let text = LocalizedText::Plain("Yönetmen".to_string());
        assert_eq!(text.resolve(Locale::En, Locale::Tr), "Yönetmen");
        assert_eq!(text.resolve(Locale::Ru, Locale::Tr), "Yönetmen");
    }

    #[test]
    fn map_falls_back_to_default_locale() {
        let mut map = BTreeMap::new();
        map.insert("tr".to_string(), "Kurgu".to_string());
        map.insert("en".to_string(), "Editing".to_string());
        let text = LocalizedText::Map(map);
        assert_eq!(text.resolve(Locale::En, Locale::Tr), "Editing");
        assert_eq!(text.resolve(Locale::Fr, Locale::Tr), "Kurgu");
    }

    #[test]
    fn map_without_default_falls_back_to_any_value() {
        let mut map = BTreeMap::new();
        map.insert("ru".to_string(), "Монтаж".to_string());
        let text = LocalizedText::Map(map);
        assert_eq!(text.resolve(Locale::En, Locale::Tr), "Монтаж");
    }

    #[test]
    fn empty_map_resolves_to_empty_string() {
        let text = LocalizedText::Map(BTreeMap::new());
        assert_eq!(text.resolve(Locale::En, Locale::Tr), "");
    }

    #[test]
    fn normalize_converts_plain_to_map() {
        let mut text = LocalizedText::Plain("Renk".to_string());
        text.normalize(Locale::Tr);
        match &text {
            LocalizedText::Map(map) => assert_eq!(map.get("tr").map(String::as_str), Some("Renk")),
            LocalizedText::Plain(_) => panic!("expected map shape"),
        }
        // Already-normalized fields are left alone.
        text.normalize(Locale::En);
        assert_eq!(text.resolve(Locale::Tr, Locale::Tr), "Renk");
    }

    #[test]
    fn legacy_plain_string_deserializes() {
        let text: LocalizedText = serde_json::from_str("\"Post Production\"").unwrap();
        assert!(text.is_plain());
        let map: LocalizedText = serde_json::from_str(r#"{"tr":"Kurgu","en":"Editing"}"#).unwrap();
        assert!(!map.is_plain());
    }
}
