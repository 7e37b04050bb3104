//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use janai_classifier::{FallbackClassifier, SchemeAdvisor};
use janai_config::{load_settings, Settings};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration behind a lock for hot reload
    pub config: Arc<RwLock<Settings>>,
    classifier: Arc<RwLock<Arc<FallbackClassifier>>>,
    schemes: Arc<RwLock<Arc<SchemeAdvisor>>>,
    /// Environment name for config reload
    env: Option<String>,
}

impl AppState {
    /// Build the classifier and scheme advisor from settings
    pub fn new(config: Settings) -> Self {
        Self::with_env(config, None)
    }

    pub fn with_env(config: Settings, env: Option<String>) -> Self {
        let classifier = FallbackClassifier::from_settings(&config);
        let schemes = SchemeAdvisor::from_settings(&config);
        Self::with_components(config, classifier, schemes, env)
    }

    /// Use prebuilt components
    pub fn with_components(
        config: Settings,
        classifier: FallbackClassifier,
        schemes: SchemeAdvisor,
        env: Option<String>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            classifier: Arc::new(RwLock::new(Arc::new(classifier))),
            schemes: Arc::new(RwLock::new(Arc::new(schemes))),
            env,
        }
    }

    /// Current classifier; cloned out so no lock is held across `.await`
    pub fn classifier(&self) -> Arc<FallbackClassifier> {
        self.classifier.read().clone()
    }

    pub fn schemes(&self) -> Arc<SchemeAdvisor> {
        self.schemes.read().clone()
    }

    /// Reload configuration from files and rebuild the components
    ///
    /// In-flight requests keep the components they started with.
    pub fn reload_config(&self) -> Result<(), String> {
        let new_config = load_settings(self.env.as_deref())
            .map_err(|e| format!("Failed to reload config: {}", e))?;

        let classifier = FallbackClassifier::from_settings(&new_config);
        let schemes = SchemeAdvisor::from_settings(&new_config);

        *self.classifier.write() = Arc::new(classifier);
        *self.schemes.write() = Arc::new(schemes);
        *self.config.write() = new_config;

        tracing::info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Get a read guard to the current configuration
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }
}
