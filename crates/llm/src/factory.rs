//! LLM Factory
//!
//! Creates the configured backend from settings.

use std::sync::Arc;
use std::time::Duration;

use janai_config::{LlmProvider, LlmSettings};

use crate::backend::{GeminiBackend, GeminiConfig, LlmBackend, OpenAIBackend, OpenAIConfig};
use crate::LlmError;

pub struct LlmFactory;

impl LlmFactory {
    /// Build a backend for the configured provider
    ///
    /// `timeout` is applied at the transport level; the classifier wraps each
    /// call in its own deadline as well.
    pub fn create(
        settings: &LlmSettings,
        timeout: Duration,
    ) -> Result<Arc<dyn LlmBackend>, LlmError> {
        let api_key = settings.api_key.clone().unwrap_or_default();

        let backend: Arc<dyn LlmBackend> = match settings.provider {
            LlmProvider::Gemini => Arc::new(GeminiBackend::new(GeminiConfig {
                endpoint: settings.endpoint.clone(),
                model: settings.model.clone(),
                api_key,
                max_tokens: settings.max_tokens,
                temperature: settings.temperature,
                timeout,
            })?),
            LlmProvider::OpenAI => Arc::new(OpenAIBackend::new(OpenAIConfig {
                endpoint: settings.endpoint.clone(),
                model: settings.model.clone(),
                api_key,
                max_tokens: settings.max_tokens,
                temperature: settings.temperature,
                timeout,
            })?),
        };

        tracing::info!(
            provider = ?settings.provider,
            model = %backend.model_name(),
            "Created LLM backend"
        );

        Ok(backend)
    }
}
