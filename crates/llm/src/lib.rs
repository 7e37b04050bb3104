//! Remote model integration
//!
//! Features:
//! - Gemini and OpenAI-compatible backends behind one trait
//! - Prompt building for problem classification and scheme recommendation
//! - Backend construction from settings

pub mod backend;
pub mod factory;
pub mod prompt;

pub use backend::{
    FinishReason, GeminiBackend, GeminiConfig, GenerationResult, LlmBackend, OpenAIBackend,
    OpenAIConfig,
};
pub use factory::LlmFactory;
pub use prompt::{Message, PromptBuilder, Role};

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing API credential")]
    MissingCredential,
}

impl LlmError {
    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Api(_) => "api",
            LlmError::Network(_) => "network",
            LlmError::InvalidResponse(_) => "invalid_response",
            LlmError::Timeout => "timeout",
            LlmError::Configuration(_) => "configuration",
            LlmError::MissingCredential => "missing_credential",
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for janai_core::Error {
    fn from(err: LlmError) -> Self {
        janai_core::Error::Llm(err.to_string())
    }
}
