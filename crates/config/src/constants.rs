//! Centralized constants for the helpline classifier
//!
//! Defaults that more than one crate needs live here so the config layer,
//! the classifier and the server agree on them.

/// Helpline list sizing
pub mod helplines {
    /// Default number of records returned per classification
    pub const DEFAULT_CAP: usize = 8;

    /// Smallest accepted cap
    pub const MIN_CAP: usize = 6;

    /// Largest accepted cap
    pub const MAX_CAP: usize = 16;
}

/// Timeouts
pub mod timeouts {
    /// Remote classifier budget per request (ms)
    pub const REMOTE_CLASSIFIER_MS: u64 = 30_000;

    /// Upper bound for the remote classifier budget (ms)
    pub const MAX_REMOTE_CLASSIFIER_MS: u64 = 60_000;

    /// Whole-request timeout applied by the HTTP layer (s)
    ///
    /// Must exceed the remote budget so the fallback path can still answer.
    pub const HTTP_REQUEST_SECS: u64 = 45;
}

/// Service endpoints
pub mod endpoints {
    /// Gemini REST API base
    pub const GEMINI_DEFAULT: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// OpenAI-compatible API base
    pub const OPENAI_DEFAULT: &str = "https://api.openai.com/v1";

    /// Default Gemini model
    pub const GEMINI_MODEL: &str = "gemini-pro";
}

/// Scheme recommendation limits
pub mod schemes {
    /// Schemes returned when a profile matches no category rule
    pub const PROFILE_FALLBACK_LIMIT: usize = 8;

    /// Schemes returned when remote recommendation fails
    pub const RECOMMEND_FALLBACK_LIMIT: usize = 5;

    /// Estimated tokens of catalog entries sent to the ranking model
    pub const RANKING_CATALOG_TOKEN_BUDGET: usize = 2_000;
}
