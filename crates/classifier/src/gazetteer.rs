//! State gazetteer
//!
//! Detects an explicitly named Indian state (or one of its major cities and
//! utilities) in free text. The first entry in declaration order wins.

use once_cell::sync::Lazy;
use regex::Regex;

use janai_core::ALL_INDIA;

/// States and the names that identify them, in detection order
const STATES: &[(&str, &[&str])] = &[
    (
        "Telangana",
        &["telangana", "hyderabad", "tsspdcl", "tpgpdcl", "hmwssb", "secunderabad", "हैदराबाद", "తెలంగాణ", "హైదరాబాద్"],
    ),
    (
        "Maharashtra",
        &["maharashtra", "mumbai", "pune", "nagpur", "msedcl", "महाराष्ट्र", "मुंबई", "पुणे"],
    ),
    (
        "Tamil Nadu",
        &["tamil nadu", "chennai", "madurai", "coimbatore", "தமிழ்நாடு", "சென்னை"],
    ),
    (
        "Karnataka",
        &["karnataka", "bangalore", "bengaluru", "mysore", "ಕರ್ನಾಟಕ", "ಬೆಂಗಳೂರು"],
    ),
    ("Delhi", &["delhi", "new delhi", "ncr", "दिल्ली", "டெல்லி", "దిల్లీ", "দিল্লি"]),
    (
        "Uttar Pradesh",
        &["uttar pradesh", "lucknow", "kanpur", "agra", "uppcl", "उत्तर प्रदेश", "लखनऊ"],
    ),
    ("Gujarat", &["gujarat", "ahmedabad", "surat", "vadodara", "ગુજરાત", "અમદાવાદ"]),
    (
        "West Bengal",
        &["west bengal", "kolkata", "calcutta", "পশ্চিমবঙ্গ", "কলকাতা"],
    ),
    (
        "Andhra Pradesh",
        &["andhra pradesh", "vijayawada", "visakhapatnam", "ఆంధ్రప్రదేశ్", "విజయవాడ"],
    ),
    (
        "Kerala",
        &["kerala", "thiruvananthapuram", "kochi", "kozhikode", "കേരളം", "കൊച്ചി"],
    ),
    ("Punjab", &["punjab", "chandigarh", "ludhiana", "pspcl", "ਪੰਜਾਬ", "ਲੁਧਿਆਣਾ"]),
];

/// Latin aliases are word-bounded; native-script aliases match anywhere,
/// since case suffixes attach directly to the name ("কলকাতায়")
fn alias_pattern(alias: &str) -> String {
    if alias.is_ascii() {
        format!(r"\b{}\b", regex::escape(alias))
    } else {
        regex::escape(alias)
    }
}

/// One compiled pattern per state, matching any of its aliases
static PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    STATES
        .iter()
        .filter_map(|(state, aliases)| {
            let alternation = aliases
                .iter()
                .map(|alias| alias_pattern(alias))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)(?:{})", alternation);
            match Regex::new(&pattern) {
                Ok(re) => Some((*state, re)),
                Err(e) => {
                    tracing::warn!(state = %state, error = %e, "Failed to compile state pattern");
                    None
                }
            }
        })
        .collect()
});

/// Fixed state gazetteer
#[derive(Debug, Clone, Copy, Default)]
pub struct Gazetteer;

impl Gazetteer {
    pub fn new() -> Self {
        Self
    }

    /// Canonical state names in detection order
    pub fn states(&self) -> impl Iterator<Item = &'static str> {
        STATES.iter().map(|(state, _)| *state)
    }

    /// First state named in the text
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(state, _)| *state)
    }

    /// Canonical name for a caller-supplied state or alias
    pub fn normalize(&self, name: &str) -> Option<&'static str> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        STATES
            .iter()
            .find(|(state, aliases)| state.to_lowercase() == name || aliases.contains(&name.as_str()))
            .map(|(state, _)| *state)
    }

    /// State for a request: text mention, then a known caller state, then
    /// "All India"
    pub fn resolve(&self, text: &str, provided: Option<&str>) -> String {
        self.detect(text)
            .or_else(|| provided.and_then(|p| self.normalize(p)))
            .unwrap_or(ALL_INDIA)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_city() {
        let g = Gazetteer::new();
        assert_eq!(g.detect("water supply has stopped in Hyderabad"), Some("Telangana"));
        assert_eq!(g.detect("Power cut in BENGALURU"), Some("Karnataka"));
        assert_eq!(g.detect("मुंबई में बिजली नहीं है"), Some("Maharashtra"));
    }

    #[test]
    fn test_declaration_order_wins() {
        // Telangana is declared before Delhi
        let g = Gazetteer::new();
        assert_eq!(g.detect("moved from delhi to hyderabad"), Some("Telangana"));
    }

    #[test]
    fn test_word_boundaries() {
        let g = Gazetteer::new();
        assert_eq!(g.detect("my electricity bill increased"), None);
        assert_eq!(g.detect("the ncr region"), Some("Delhi"));
    }

    #[test]
    fn test_native_script_with_case_suffix() {
        let g = Gazetteer::new();
        assert_eq!(g.detect("আগুন লেগেছে কলকাতায়"), Some("West Bengal"));
        assert_eq!(g.detect("சென்னையில் தீ"), Some("Tamil Nadu"));
        assert_eq!(g.detect("हैदराबाद में पानी नहीं"), Some("Telangana"));
    }

    #[test]
    fn test_normalize() {
        let g = Gazetteer::new();
        assert_eq!(g.normalize("tamil nadu"), Some("Tamil Nadu"));
        assert_eq!(g.normalize(" Kolkata "), Some("West Bengal"));
        assert_eq!(g.normalize("Atlantis"), None);
        assert_eq!(g.normalize(""), None);
    }

    #[test]
    fn test_resolve() {
        let g = Gazetteer::new();
        assert_eq!(g.resolve("fire in chennai", Some("Kerala")), "Tamil Nadu");
        assert_eq!(g.resolve("fire nearby", Some("kerala")), "Kerala");
        assert_eq!(g.resolve("fire nearby", Some("Atlantis")), ALL_INDIA);
        assert_eq!(g.resolve("fire nearby", None), ALL_INDIA);
    }

    #[test]
    fn test_all_states_compile() {
        assert_eq!(PATTERNS.len(), Gazetteer::new().states().count());
    }
}
