//! Language definitions for the supported Indian languages
//!
//! Covers the languages the helpline accepts input in, plus the script
//! detection used when the caller does not name an input language.

use serde::{Deserialize, Serialize};

/// Supported input languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Bengali,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Urdu,
    Odia,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Bengali => "bn",
            Self::Marathi => "mr",
            Self::Gujarati => "gu",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Punjabi => "pa",
            Self::Urdu => "ur",
            Self::Odia => "or",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Bengali => "Bengali",
            Self::Marathi => "Marathi",
            Self::Gujarati => "Gujarati",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Punjabi => "Punjabi",
            Self::Urdu => "Urdu",
            Self::Odia => "Odia",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::Hindi | Self::Marathi => Script::Devanagari,
            Self::Tamil => Script::Tamil,
            Self::Telugu => Script::Telugu,
            Self::Bengali => Script::Bengali,
            Self::Gujarati => Script::Gujarati,
            Self::Kannada => Script::Kannada,
            Self::Malayalam => Script::Malayalam,
            Self::Punjabi => Script::Gurmukhi,
            Self::Urdu => Script::Arabic,
            Self::Odia => Script::Odia,
            Self::English => Script::Latin,
        }
    }

    /// Default language written in a script
    ///
    /// Devanagari maps to Hindi; Marathi is only reachable through an
    /// explicit language code.
    pub fn from_script(script: Script) -> Self {
        match script {
            Script::Latin => Self::English,
            Script::Devanagari => Self::Hindi,
            Script::Bengali => Self::Bengali,
            Script::Tamil => Self::Tamil,
            Script::Telugu => Self::Telugu,
            Script::Kannada => Self::Kannada,
            Script::Malayalam => Self::Malayalam,
            Script::Gujarati => Self::Gujarati,
            Script::Gurmukhi => Self::Punjabi,
            Script::Odia => Self::Odia,
            Script::Arabic => Self::Urdu,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "ta" | "tam" | "tamil" => Some(Self::Tamil),
            "te" | "tel" | "telugu" => Some(Self::Telugu),
            "bn" | "ben" | "bengali" | "bangla" => Some(Self::Bengali),
            "mr" | "mar" | "marathi" => Some(Self::Marathi),
            "gu" | "guj" | "gujarati" => Some(Self::Gujarati),
            "kn" | "kan" | "kannada" => Some(Self::Kannada),
            "ml" | "mal" | "malayalam" => Some(Self::Malayalam),
            "pa" | "pan" | "punjabi" | "panjabi" => Some(Self::Punjabi),
            "ur" | "urd" | "urdu" => Some(Self::Urdu),
            "or" | "ori" | "odia" | "oriya" => Some(Self::Odia),
            _ => None,
        }
    }

    /// Parse a BCP-47 style locale such as `hi-IN`, falling back to names
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);
        Self::from_str_loose(primary).or_else(|| Self::from_str_loose(locale))
    }

    /// Resolve the language of a request
    ///
    /// An explicit locale wins; otherwise the dominant script of the text
    /// decides, and text without any recognised script is English.
    pub fn resolve(locale: Option<&str>, text: &str) -> Self {
        locale
            .and_then(Self::from_locale)
            .or_else(|| Script::detect(text).map(Self::from_script))
            .unwrap_or_default()
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Hindi,
            Self::Tamil,
            Self::Telugu,
            Self::Bengali,
            Self::Marathi,
            Self::Gujarati,
            Self::Kannada,
            Self::Malayalam,
            Self::Punjabi,
            Self::Urdu,
            Self::Odia,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
    Bengali,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Gujarati,
    Gurmukhi,
    Odia,
    Arabic,
}

impl Script {
    const DETECTION_ORDER: [Script; 11] = [
        Self::Devanagari,
        Self::Bengali,
        Self::Tamil,
        Self::Telugu,
        Self::Kannada,
        Self::Malayalam,
        Self::Gujarati,
        Self::Gurmukhi,
        Self::Odia,
        Self::Arabic,
        Self::Latin,
    ];

    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Devanagari => (0x0900, 0x097F),
            Self::Bengali => (0x0980, 0x09FF),
            Self::Tamil => (0x0B80, 0x0BFF),
            Self::Telugu => (0x0C00, 0x0C7F),
            Self::Kannada => (0x0C80, 0x0CFF),
            Self::Malayalam => (0x0D00, 0x0D7F),
            Self::Gujarati => (0x0A80, 0x0AFF),
            Self::Gurmukhi => (0x0A00, 0x0A7F),
            Self::Odia => (0x0B00, 0x0B7F),
            Self::Arabic => (0x0600, 0x06FF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Detect script from text (returns most frequent script)
    ///
    /// Whitespace, digits and ASCII punctuation carry no signal and are
    /// skipped. Ties resolve to the earlier script in detection order.
    pub fn detect(text: &str) -> Option<Self> {
        let mut counts = [0usize; 11];

        for c in text.chars() {
            if c.is_whitespace() || c.is_ascii_digit() || c.is_ascii_punctuation() {
                continue;
            }
            if let Some(idx) = Self::DETECTION_ORDER
                .iter()
                .position(|script| script.contains_char(c))
            {
                counts[idx] += 1;
            }
        }

        let mut best: Option<(usize, usize)> = None;
        for (idx, &count) in counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((idx, count));
            }
        }
        best.map(|(idx, _)| Self::DETECTION_ORDER[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Odia.code(), "or");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Hindi.script(), Script::Devanagari);
        assert_eq!(Language::Marathi.script(), Script::Devanagari);
        assert_eq!(Language::Urdu.script(), Script::Arabic);
        assert_eq!(Language::Punjabi.script(), Script::Gurmukhi);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("hi-IN"), Some(Language::Hindi));
        assert_eq!(Language::from_locale("or-IN"), Some(Language::Odia));
        assert_eq!(Language::from_locale("ta_IN"), Some(Language::Tamil));
        assert_eq!(Language::from_locale("Bengali"), Some(Language::Bengali));
        assert_eq!(Language::from_locale("xx-YY"), None);
    }

    #[test]
    fn test_script_detect() {
        assert_eq!(Script::detect("Hello world"), Some(Script::Latin));
        assert_eq!(Script::detect("मेरा बच्चा गुलाम बनाया जा रहा है"), Some(Script::Devanagari));
        assert_eq!(Script::detect("வணக்கம்"), Some(Script::Tamil));
        assert_eq!(Script::detect("  123 !! "), None);
    }

    #[test]
    fn test_resolve_prefers_locale() {
        assert_eq!(Language::resolve(Some("mr-IN"), "पाणी नाही"), Language::Marathi);
        assert_eq!(Language::resolve(None, "पाणी नाही"), Language::Hindi);
        assert_eq!(Language::resolve(Some("zz"), "no water"), Language::English);
        assert_eq!(Language::resolve(None, ""), Language::English);
    }

    #[test]
    fn test_all_languages() {
        assert_eq!(Language::all().len(), 12);
    }
}
