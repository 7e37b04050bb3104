//! Classification request and result types

use serde::{Deserialize, Serialize};

use crate::category::{Category, UrgencyLevel};
use crate::error::{Error, Result};
use crate::helpline::HelplineRecord;
use crate::language::Language;

/// State label used when no specific state applies
pub const ALL_INDIA: &str = "All India";

/// Incoming classification request
///
/// Accepts both the emergency form (`text`, `inputLanguage`) and the
/// problem-analysis form (`description`, `language`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[serde(default, alias = "description")]
    pub text: String,
    #[serde(default, alias = "language")]
    pub input_language: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.input_language = Some(language.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Reject requests that carry no text to classify
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "No text provided for processing".to_string(),
            ));
        }
        Ok(())
    }

    /// Language of the request, from the locale or the text's script
    pub fn language(&self) -> Language {
        Language::resolve(self.input_language.as_deref(), &self.text)
    }
}

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Remote,
    Rules,
}

/// Outcome of classifying one request
///
/// Built fresh per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub problem_type: String,
    pub suggested_issue: String,
    pub detected_state: String,
    pub detected_language: Language,
    pub urgency_level: UrgencyLevel,
    pub confidence: f32,
    pub helplines: Vec<HelplineRecord>,
    pub recommendations: Vec<String>,
    pub response_text: String,
    pub source: ClassificationSource,
}

impl ClassificationResult {
    pub fn has_number(&self, number: &str) -> bool {
        self.helplines.iter().any(|h| h.number == number)
    }
}
