//! Error types shared across the workspace

use thiserror::Error;

/// Result alias using the core error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Request rejected before classification (empty text, missing field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The classification engine itself failed
    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error was caused by the caller rather than the engine
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_flag() {
        assert!(Error::InvalidInput("empty".into()).is_input_error());
        assert!(!Error::Classifier("boom".into()).is_input_error());
    }

    #[test]
    fn test_from_serde() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
