//! Remote-first classification with rule-based fallback

use std::time::Instant;

use async_trait::async_trait;

use janai_config::Settings;
use janai_core::{ClassificationResult, Classifier, ClassifyRequest, Result};

use crate::assembler::HelplineAssembler;
use crate::remote::RemoteClassifier;
use crate::rule_based::RuleBasedClassifier;

/// Tries the remote model when configured and degrades to the keyword
/// rules on any remote failure
pub struct FallbackClassifier {
    remote: Option<RemoteClassifier>,
    rules: RuleBasedClassifier,
}

impl FallbackClassifier {
    pub fn new(rules: RuleBasedClassifier, remote: Option<RemoteClassifier>) -> Self {
        Self { remote, rules }
    }

    /// Rules only
    pub fn rules_only(rules: RuleBasedClassifier) -> Self {
        Self::new(rules, None)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let rules = RuleBasedClassifier::new(HelplineAssembler::new(
            settings.classifier.max_helplines,
        ));

        if !settings.classifier.remote_enabled {
            tracing::info!("Remote classification disabled by configuration");
            return Self::rules_only(rules);
        }

        match RemoteClassifier::from_settings(settings) {
            Ok(remote) => {
                tracing::info!(
                    timeout_ms = remote.timeout().as_millis() as u64,
                    "Remote classification enabled"
                );
                Self::new(rules, Some(remote))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Remote classifier unavailable, using keyword rules only");
                metrics::counter!("janai_remote_failures_total", "reason" => e.reason()).increment(1);
                Self::rules_only(rules)
            }
        }
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    async fn classify_inner(&self, request: &ClassifyRequest) -> Result<ClassificationResult> {
        if let Some(remote) = &self.remote {
            match remote.analyze(request).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::warn!(
                        reason = e.reason(),
                        error = %e,
                        "Remote classification failed, falling back to keyword rules"
                    );
                    metrics::counter!("janai_remote_failures_total", "reason" => e.reason())
                        .increment(1);
                }
            }
        }

        self.rules.classify_now(request)
    }
}

#[async_trait]
impl Classifier for FallbackClassifier {
    async fn classify(&self, request: &ClassifyRequest) -> Result<ClassificationResult> {
        request.validate()?;

        let start = Instant::now();
        let result = self.classify_inner(request).await?;

        let source = match result.source {
            janai_core::ClassificationSource::Remote => "remote",
            janai_core::ClassificationSource::Rules => "rules",
        };
        metrics::counter!(
            "janai_classifications_total",
            "source" => source,
            "category" => result.category.as_str()
        )
        .increment(1);
        metrics::histogram!("janai_classification_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        Ok(result)
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
