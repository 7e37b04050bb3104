//! Helpline classification engine
//!
//! Features:
//! - Multilingual keyword lexicon across ten Indian languages
//! - Ordered category rules with urgency escalation
//! - State gazetteer and national/state helpline directories
//! - Helpline assembly with dedup, cap and the 112 guarantee
//! - Remote model classification with rule-based fallback
//! - Government scheme matching and recommendation

pub mod assembler;
pub mod directory;
pub mod fallback;
pub mod gazetteer;
pub mod lexicon;
pub mod matcher;
pub mod remote;
pub mod resolver;
pub mod responses;
pub mod rule_based;
pub mod schemes;

pub use assembler::HelplineAssembler;
pub use fallback::FallbackClassifier;
pub use gazetteer::Gazetteer;
pub use lexicon::{CueSet, Lexicon};
pub use matcher::{KeywordMatcher, Matches};
pub use remote::RemoteClassifier;
pub use resolver::{CategoryResolver, Resolution, Rule};
pub use rule_based::RuleBasedClassifier;
pub use schemes::{InMemorySchemeCatalog, JsonSchemeCatalog, SchemeAdvisor};

use thiserror::Error;

/// Classifier errors
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Remote classifier error: {0}")]
    Remote(#[from] janai_llm::LlmError),

    #[error("Remote classifier timed out after {0} ms")]
    Timeout(u64),

    #[error("Unparseable remote response: {0}")]
    Parse(String),

    #[error("Scheme catalog error: {0}")]
    Catalog(String),
}

impl ClassifierError {
    /// Short label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            ClassifierError::Remote(e) => e.kind(),
            ClassifierError::Timeout(_) => "timeout",
            ClassifierError::Parse(_) => "parse",
            ClassifierError::Catalog(_) => "catalog",
        }
    }
}

impl From<ClassifierError> for janai_core::Error {
    fn from(err: ClassifierError) -> Self {
        janai_core::Error::Classifier(err.to_string())
    }
}
