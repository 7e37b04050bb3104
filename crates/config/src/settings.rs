//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{endpoints, helplines, timeouts};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation
    #[default]
    Development,
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Classification engine configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Remote model configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_classifier()?;
        self.validate_llm()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout cannot be 0".to_string(),
            });
        }

        Ok(())
    }

    fn validate_classifier(&self) -> Result<(), ConfigError> {
        let classifier = &self.classifier;

        if !(helplines::MIN_CAP..=helplines::MAX_CAP).contains(&classifier.max_helplines) {
            return Err(ConfigError::InvalidValue {
                field: "classifier.max_helplines".to_string(),
                message: format!(
                    "Must be between {} and {}, got {}",
                    helplines::MIN_CAP,
                    helplines::MAX_CAP,
                    classifier.max_helplines
                ),
            });
        }

        if !(1_000..=timeouts::MAX_REMOTE_CLASSIFIER_MS).contains(&classifier.remote_timeout_ms) {
            return Err(ConfigError::InvalidValue {
                field: "classifier.remote_timeout_ms".to_string(),
                message: format!(
                    "Must be between 1000 and {}, got {}",
                    timeouts::MAX_REMOTE_CLASSIFIER_MS,
                    classifier.remote_timeout_ms
                ),
            });
        }

        // The HTTP timeout has to leave room for the fallback after a remote timeout
        if classifier.remote_enabled
            && self.server.timeout_seconds * 1_000 <= classifier.remote_timeout_ms
        {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: format!(
                    "Must exceed classifier.remote_timeout_ms ({}ms), got {}s",
                    classifier.remote_timeout_ms, self.server.timeout_seconds
                ),
            });
        }

        Ok(())
    }

    fn validate_llm(&self) -> Result<(), ConfigError> {
        let llm = &self.llm;

        if !(0.0..=2.0).contains(&llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature".to_string(),
                message: format!("Must be between 0.0 and 2.0, got {}", llm.temperature),
            });
        }

        if llm.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.environment.is_production()
            && self.classifier.remote_enabled
            && !llm.has_api_key()
        {
            return Err(ConfigError::MissingField(
                "llm.api_key (required in production when classifier.remote_enabled is set)"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the remote classifier should be attempted at all
    pub fn remote_classification_active(&self) -> bool {
        self.classifier.remote_enabled && self.llm.has_api_key()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_timeout() -> u64 {
    timeouts::HTTP_REQUEST_SECS
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Classification engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Attempt the remote classifier before the rule engine
    #[serde(default = "default_true")]
    pub remote_enabled: bool,

    /// Hard timeout for one remote call
    #[serde(default = "default_remote_timeout_ms")]
    pub remote_timeout_ms: u64,

    /// Maximum helplines per result
    #[serde(default = "default_max_helplines")]
    pub max_helplines: usize,
}

fn default_remote_timeout_ms() -> u64 {
    timeouts::REMOTE_CLASSIFIER_MS
}
fn default_max_helplines() -> usize {
    helplines::DEFAULT_CAP
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            remote_enabled: true,
            remote_timeout_ms: default_remote_timeout_ms(),
            max_helplines: default_max_helplines(),
        }
    }
}

/// Remote model provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Gemini,
    /// Any OpenAI-compatible chat completions API
    #[serde(alias = "open_ai", alias = "openai-compatible")]
    OpenAI,
}

/// Remote model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub provider: LlmProvider,

    /// API base URL
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API key; defaults to `GEMINI_API_KEY`
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_llm_endpoint() -> String {
    endpoints::GEMINI_DEFAULT.to_string()
}
fn default_llm_model() -> String {
    endpoints::GEMINI_MODEL.to_string()
}
fn default_api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}
fn default_temperature() -> f32 {
    0.2
}
fn default_max_tokens() -> usize {
    1024
}

impl LlmSettings {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            api_key: default_api_key(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file with `{"schemes": [...]}`
    #[serde(default = "default_schemes_path")]
    pub schemes_path: String,
}

fn default_schemes_path() -> String {
    "data/schemes.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            schemes_path: default_schemes_path(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from `config/` and the environment
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from a config directory and the environment
///
/// Priority: env vars > `{dir}/{env}` > `{dir}/default` > defaults
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = dir.join("default");
    builder = builder.add_source(
        File::with_name(&default_path.to_string_lossy()).required(false),
    );

    if let Some(env_name) = env {
        let env_path = dir.join(env_name);
        builder =
            builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("JANAI")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        dir = %dir.display(),
        env = env.unwrap_or("default"),
        "Settings loaded"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.classifier.max_helplines, 8);
        assert_eq!(settings.classifier.remote_timeout_ms, 30_000);
        assert!(settings.classifier.remote_enabled);
        assert_eq!(settings.llm.provider, LlmProvider::Gemini);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_helpline_cap_validation() {
        let mut settings = Settings::default();
        settings.classifier.max_helplines = 5;
        assert!(settings.validate().is_err());

        settings.classifier.max_helplines = 17;
        assert!(settings.validate().is_err());

        settings.classifier.max_helplines = 6;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_timeout_must_exceed_remote_timeout() {
        let mut settings = Settings::default();
        settings.server.timeout_seconds = 30;
        assert!(settings.validate().is_err());

        settings.classifier.remote_enabled = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_production_requires_api_key() {
        let mut settings = Settings::default();
        settings.environment = RuntimeEnvironment::Production;
        settings.llm.api_key = None;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::MissingField(_))
        ));

        settings.classifier.remote_enabled = false;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_remote_classification_active() {
        let mut settings = Settings::default();
        settings.llm.api_key = Some("   ".to_string());
        assert!(!settings.remote_classification_active());

        settings.llm.api_key = Some("key".to_string());
        assert!(settings.remote_classification_active());

        settings.classifier.remote_enabled = false;
        assert!(!settings.remote_classification_active());
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("default.yaml")).unwrap();
        writeln!(
            file,
            "server:\n  port: 9000\nclassifier:\n  max_helplines: 10\nllm:\n  provider: openai\n  model: gpt-4o-mini"
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.classifier.max_helplines, 10);
        assert_eq!(settings.llm.provider, LlmProvider::OpenAI);
        assert_eq!(settings.llm.model, "gpt-4o-mini");
        assert_eq!(settings.data.schemes_path, "data/schemes.json");
    }

    #[test]
    fn test_load_settings_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "classifier:\n  max_helplines: 2\n",
        )
        .unwrap();

        let err = load_settings_from(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server.port, settings.server.port);
    }
}
