//! Prompt Building
//!
//! Constructs prompts for problem classification and scheme recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

use janai_core::{Language, Scheme, UserProfile};

/// Longest problem description forwarded to the model, in graphemes
pub const MAX_DESCRIPTION_GRAPHEMES: usize = 2000;

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Builder for the prompts sent to the remote model
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    messages: Vec<Message>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// System prompt for helpline classification
    pub fn classification_system(mut self) -> Self {
        self.messages.push(Message::system(CLASSIFICATION_SYSTEM));
        self
    }

    /// The problem to classify
    pub fn classification_request(
        mut self,
        text: &str,
        language: Language,
        state: Option<&str>,
    ) -> Self {
        let content = format!(
            "Problem description: \"{}\"\nInput language: {}\nCaller state: {}\n\nRespond with the JSON object only.",
            truncate_graphemes(text, MAX_DESCRIPTION_GRAPHEMES),
            language.name(),
            state.unwrap_or("not provided"),
        );
        self.messages.push(Message::user(content));
        self
    }

    /// System prompt for scheme recommendation
    pub fn scheme_system(mut self) -> Self {
        self.messages.push(Message::system(SCHEME_SYSTEM));
        self
    }

    /// The problem, profile and candidate schemes to rank
    pub fn scheme_request(
        mut self,
        problem: &str,
        profile: Option<&UserProfile>,
        schemes: &[Scheme],
        language: Language,
    ) -> Self {
        let profile_json = profile
            .and_then(|p| serde_json::to_string(p).ok())
            .unwrap_or_else(|| "{}".to_string());
        let schemes_json = serde_json::to_string(schemes).unwrap_or_else(|_| "[]".to_string());

        let content = format!(
            "Problem description: \"{}\"\nUser profile: {}\nLanguage: {}\n\nAvailable schemes: {}\n\nRespond with the JSON object only.",
            truncate_graphemes(problem, MAX_DESCRIPTION_GRAPHEMES),
            profile_json,
            language.name(),
            schemes_json,
        );
        self.messages.push(Message::user(content));
        self
    }

    pub fn build(self) -> Vec<Message> {
        self.messages
    }
}

/// Cut text to at most `max` graphemes without splitting a cluster
pub fn truncate_graphemes(text: &str, max: usize) -> &str {
    match text.grapheme_indices(true).nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

const CLASSIFICATION_SYSTEM: &str = r#"You are an Indian emergency and civic helpline assistant. You understand all Indian languages, including Hindi, Tamil, Telugu, Bengali, Marathi, Gujarati, Kannada, Malayalam, Punjabi, Urdu and Odia, in native script or romanised.

Classify the caller's problem and return a single JSON object:
{
  "category": "child | women | police | medical | fire | electricity | water | transport | general",
  "problemType": "short label, e.g. Child Protection, Women Safety, Medical Emergency",
  "suggestedIssue": "Child Help | Women Help | Police | Health | Fire | Electricity | Water | Transport | empty",
  "detectedState": "Indian state named in the text, or All India",
  "detectedLanguage": "language name",
  "urgencyLevel": "low | medium | high | critical",
  "confidence": 0.0,
  "helplines": [
    {"number": "", "name": "", "type": "category", "description": "", "availability": "24/7", "scope": "national or state name"}
  ],
  "recommendations": ["specific actionable steps"],
  "responseText": "short helpful reply in the caller's language"
}

Rules:
1. Any child in danger (abuse, labour, trafficking, missing child) is category child and lists 1098 first.
2. Women harassed, stalked or facing domestic violence is category women with 1091 and 181.
3. Water supply and sewerage problems list 1916 first. Electricity problems list 1912 first.
4. Transport problems list 139 and 1033. Medical: 108 and 102. Police: 100. Fire: 101.
5. Only name a state that the text itself mentions.
6. Always include 112."#;

const SCHEME_SYSTEM: &str = r#"You are an expert advisor on Indian government welfare schemes. Recommend the schemes from the provided list that best address the user's problem, considering age, gender and occupation.

Return a single JSON object:
{
  "recommendedSchemes": [
    {"name": "", "category": "", "description": "why it is relevant", "eligibility": "", "benefits": ""}
  ]
}

Recommend between 3 and 8 schemes, most relevant first. Only use schemes from the provided list."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt() {
        let messages = PromptBuilder::new()
            .classification_system()
            .classification_request("नल से पानी नहीं आ रहा", Language::Hindi, Some("Delhi"))
            .build();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("1098"));
        assert!(messages[1].content.contains("Input language: Hindi"));
        assert!(messages[1].content.contains("Caller state: Delhi"));
    }

    #[test]
    fn test_scheme_prompt_includes_catalog() {
        let schemes = vec![Scheme {
            name: "PM-KISAN".into(),
            category: "Agricultural".into(),
            description: String::new(),
            eligibility: String::new(),
            benefits: String::new(),
        }];
        let messages = PromptBuilder::new()
            .scheme_system()
            .scheme_request("crop failed", None, &schemes, Language::English)
            .build();
        assert!(messages[1].content.contains("PM-KISAN"));
        assert!(messages[1].content.contains("User profile: {}"));
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("hello", 10), "hello");
        assert_eq!(truncate_graphemes("hello", 2), "he");
        // "नी" is one grapheme cluster and is never split
        assert_eq!(truncate_graphemes("पानी", 1), "पा");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
