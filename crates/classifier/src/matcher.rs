//! Keyword matching
//!
//! Case-insensitive substring containment over the lexicon. No stemming and
//! no tokenization; non-Latin scripts are compared as raw character runs.

use std::collections::HashSet;

use janai_core::Category;

use crate::lexicon::{CueSet, Lexicon};

/// Whether any needle occurs in an already-lowercased haystack
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Categories and cues found in one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches {
    text: String,
    categories: HashSet<Category>,
}

impl Matches {
    /// Whether the category's lexicon matched
    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Whether an auxiliary cue set matched
    pub fn has_cue(&self, set: CueSet) -> bool {
        contains_any(&self.text, Lexicon::cues(set))
    }

    /// Matched categories in priority order
    pub fn categories(&self) -> Vec<Category> {
        Category::all()
            .iter()
            .copied()
            .filter(|c| self.categories.contains(c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The lowercased text the matches were computed from
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Tests free text against every category lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, text: &str) -> Matches {
        let text = text.to_lowercase();
        let categories = Category::all()
            .iter()
            .copied()
            .filter(|c| contains_any(&text, Lexicon::keywords(*c)))
            .collect();

        Matches { text, categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let matches = KeywordMatcher::new().find("Call the POLICE now");
        assert!(matches.has(Category::Police));
        assert_eq!(matches.text(), "call the police now");
    }

    #[test]
    fn test_multiple_categories() {
        let matches = KeywordMatcher::new().find("my child fell near the fire");
        assert_eq!(matches.categories(), vec![Category::Child, Category::Fire]);
    }

    #[test]
    fn test_native_script() {
        let matches = KeywordMatcher::new().find("नल से पानी नहीं आ रहा");
        assert!(matches.has(Category::Water));
        assert!(!matches.has(Category::Child));
    }

    #[test]
    fn test_no_match() {
        let matches = KeywordMatcher::new().find("hello there");
        assert!(matches.is_empty());
        assert!(matches.categories().is_empty());
    }

    #[test]
    fn test_cues() {
        let matches = KeywordMatcher::new().find("Bus breakdown on the highway");
        assert!(matches.has_cue(CueSet::TransportEmergency));
        assert!(!matches.has_cue(CueSet::EmergencyHealth));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("abc", &["x", "b"]));
        assert!(!contains_any("abc", &[]));
    }
}
