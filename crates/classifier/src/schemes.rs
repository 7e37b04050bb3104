//! Government scheme catalog and recommendation
//!
//! Profile matching is a fixed occupation table with age and gender
//! fallbacks. Problem-based recommendation asks the remote model to rank the
//! catalog and returns the head of the catalog when that fails.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use janai_config::constants::schemes::{
    PROFILE_FALLBACK_LIMIT, RANKING_CATALOG_TOKEN_BUDGET, RECOMMEND_FALLBACK_LIMIT,
};
use janai_config::Settings;
use janai_core::{Error, Language, Result, Scheme, SchemeCatalog, UserProfile};
use janai_llm::{LlmBackend, LlmFactory, PromptBuilder};

use crate::remote::extract_json;
use crate::ClassifierError;

/// Age from which pension and health schemes apply
const SENIOR_AGE: u32 = 60;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    schemes: Vec<Scheme>,
}

/// Catalog read once from a `{"schemes": [...]}` JSON file
#[derive(Debug, Clone)]
pub struct JsonSchemeCatalog {
    schemes: Vec<Scheme>,
}

impl JsonSchemeCatalog {
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ClassifierError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|e| {
            ClassifierError::Catalog(format!("invalid catalog {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), count = file.schemes.len(), "Loaded scheme catalog");
        Ok(Self {
            schemes: file.schemes,
        })
    }
}

impl SchemeCatalog for JsonSchemeCatalog {
    fn schemes(&self) -> Result<Vec<Scheme>> {
        Ok(self.schemes.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySchemeCatalog {
    schemes: Vec<Scheme>,
}

impl InMemorySchemeCatalog {
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }
}

impl SchemeCatalog for InMemorySchemeCatalog {
    fn schemes(&self) -> Result<Vec<Scheme>> {
        Ok(self.schemes.clone())
    }
}

/// Category keywords for a known occupation
fn occupation_keywords(occupation: &str) -> Option<&'static [&'static str]> {
    match occupation.trim().to_lowercase().as_str() {
        "student" => Some(&["education", "scholarship", "skill"]),
        "farmer" => Some(&["agricultural", "crop", "rural", "kisan"]),
        "homemaker" => Some(&["women", "maternity", "family", "social security"]),
        "employee" | "self employed" => Some(&["skill", "entrepreneurship", "pension"]),
        "business owner" => Some(&["entrepreneurship", "startup", "skill"]),
        "retired" => Some(&["pension", "health", "social security"]),
        _ => None,
    }
}

/// Finds and recommends schemes from a catalog
pub struct SchemeAdvisor {
    catalog: Arc<dyn SchemeCatalog>,
    backend: Option<Arc<dyn LlmBackend>>,
    timeout: Duration,
}

impl SchemeAdvisor {
    pub fn new(catalog: Arc<dyn SchemeCatalog>) -> Self {
        Self {
            catalog,
            backend: None,
            timeout: Duration::from_millis(janai_config::constants::timeouts::REMOTE_CLASSIFIER_MS),
        }
    }

    /// Catalog from `data.schemes_path`, model ranking when the remote
    /// classifier is active
    ///
    /// An unreadable catalog leaves the advisor empty rather than failing
    /// startup.
    pub fn from_settings(settings: &Settings) -> Self {
        let catalog: Arc<dyn SchemeCatalog> =
            match JsonSchemeCatalog::load(&settings.data.schemes_path) {
                Ok(catalog) => Arc::new(catalog),
                Err(e) => {
                    tracing::warn!(error = %e, "Scheme catalog unavailable, serving an empty catalog");
                    Arc::new(InMemorySchemeCatalog::default())
                }
            };
        let advisor = Self::new(catalog);

        if !settings.remote_classification_active() {
            return advisor;
        }

        let timeout = Duration::from_millis(settings.classifier.remote_timeout_ms);
        match LlmFactory::create(&settings.llm, timeout) {
            Ok(backend) => advisor.with_backend(backend, timeout),
            Err(e) => {
                tracing::warn!(error = %e, "Scheme ranking model unavailable");
                advisor
            }
        }
    }

    pub fn ranking_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Enable model-ranked recommendations
    pub fn with_backend(mut self, backend: Arc<dyn LlmBackend>, timeout: Duration) -> Self {
        self.backend = Some(backend);
        self.timeout = timeout;
        self
    }

    /// Schemes matching a complete user profile
    pub fn find(&self, profile: &UserProfile) -> Result<Vec<Scheme>> {
        if let Some(field) = profile.missing_fields().first() {
            return Err(Error::InvalidInput(format!("{} is required", field)));
        }

        let schemes = self.catalog.schemes()?;
        let occupation = profile.occupation.as_deref().unwrap_or_default();

        let matched: Vec<Scheme> = if let Some(keywords) = occupation_keywords(occupation) {
            schemes.into_iter().filter(|s| s.matches_any(keywords)).collect()
        } else if profile.age.unwrap_or_default() >= SENIOR_AGE {
            schemes
                .into_iter()
                .filter(|s| s.matches_any(&["pension", "health", "social security"]))
                .collect()
        } else if profile
            .gender
            .as_deref()
            .is_some_and(|g| g.trim().eq_ignore_ascii_case("female"))
        {
            schemes
                .into_iter()
                .filter(|s| s.matches_any(&["women", "maternity", "girl child"]))
                .collect()
        } else {
            schemes.into_iter().take(PROFILE_FALLBACK_LIMIT).collect()
        };

        tracing::debug!(occupation = %occupation, count = matched.len(), "Matched schemes");
        Ok(matched)
    }

    /// Schemes relevant to a problem description
    ///
    /// Falls back to the head of the catalog when no model is configured or
    /// the model call fails.
    pub async fn recommend(
        &self,
        problem: &str,
        profile: Option<&UserProfile>,
        language: Language,
    ) -> Result<Vec<Scheme>> {
        if problem.trim().is_empty() {
            return Err(Error::InvalidInput(
                "problemDescription is required".to_string(),
            ));
        }

        let schemes = self.catalog.schemes()?;

        if let Some(backend) = &self.backend {
            match self.rank(backend.as_ref(), problem, profile, &schemes, language).await {
                Ok(ranked) if !ranked.is_empty() => return Ok(ranked),
                Ok(_) => tracing::warn!("Model recommended no schemes, using catalog order"),
                Err(e) => {
                    tracing::warn!(reason = e.reason(), error = %e, "Scheme recommendation failed, using catalog order");
                    metrics::counter!("janai_remote_failures_total", "reason" => e.reason())
                        .increment(1);
                }
            }
        }

        Ok(schemes.into_iter().take(RECOMMEND_FALLBACK_LIMIT).collect())
    }

    async fn rank(
        &self,
        backend: &dyn LlmBackend,
        problem: &str,
        profile: Option<&UserProfile>,
        schemes: &[Scheme],
        language: Language,
    ) -> std::result::Result<Vec<Scheme>, ClassifierError> {
        let shortlist = fit_token_budget(backend, schemes, RANKING_CATALOG_TOKEN_BUDGET);
        if shortlist.len() < schemes.len() {
            tracing::debug!(
                sent = shortlist.len(),
                catalog = schemes.len(),
                "Catalog trimmed to the ranking token budget"
            );
        }

        let messages = PromptBuilder::new()
            .scheme_system()
            .scheme_request(problem, profile, shortlist, language)
            .build();

        let generation = tokio::time::timeout(self.timeout, backend.generate(&messages))
            .await
            .map_err(|_| ClassifierError::Timeout(self.timeout.as_millis() as u64))??;

        let reply = extract_json(&generation.text)?;
        let ranked = reply
            .get("recommendedSchemes")
            .and_then(serde_json::Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value::<Scheme>(item.clone()).ok())
                    .filter(|s| !s.name.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(ranked)
    }
}

/// Leading catalog entries whose estimated size fits in `budget` tokens
///
/// The first scheme is always kept.
fn fit_token_budget<'a>(
    backend: &dyn LlmBackend,
    schemes: &'a [Scheme],
    budget: usize,
) -> &'a [Scheme] {
    let mut used = 0;
    let fitting = schemes
        .iter()
        .take_while(|scheme| {
            used += backend.estimate_tokens(&scheme.name)
                + backend.estimate_tokens(&scheme.category)
                + backend.estimate_tokens(&scheme.description)
                + backend.estimate_tokens(&scheme.eligibility)
                + backend.estimate_tokens(&scheme.benefits);
            used <= budget
        })
        .count();
    &schemes[..fitting.max(1).min(schemes.len())]
}
