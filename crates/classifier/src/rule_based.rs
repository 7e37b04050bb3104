//! Deterministic keyword classifier
//!
//! Matcher, resolver and assembler in sequence. Needs no network and never
//! fails on valid input.

use async_trait::async_trait;

use janai_core::{
    ClassificationResult, ClassificationSource, Classifier, ClassifyRequest, Result,
};

use crate::assembler::HelplineAssembler;
use crate::gazetteer::Gazetteer;
use crate::matcher::KeywordMatcher;
use crate::resolver::CategoryResolver;
use crate::responses;

#[derive(Debug, Clone, Default)]
pub struct RuleBasedClassifier {
    matcher: KeywordMatcher,
    resolver: CategoryResolver,
    gazetteer: Gazetteer,
    assembler: HelplineAssembler,
}

impl RuleBasedClassifier {
    pub fn new(assembler: HelplineAssembler) -> Self {
        Self {
            assembler,
            ..Default::default()
        }
    }

    pub fn assembler(&self) -> &HelplineAssembler {
        &self.assembler
    }

    /// Classify without suspending
    pub fn classify_now(&self, request: &ClassifyRequest) -> Result<ClassificationResult> {
        request.validate()?;

        let matches = self.matcher.find(&request.text);
        let resolution = self.resolver.resolve(&matches);
        let state = self
            .gazetteer
            .resolve(&request.text, request.state.as_deref());
        let language = request.language();
        let category = resolution.category;

        let helplines = self.assembler.assemble(category, &state, &[]);
        let recommendations =
            responses::recommendations(category, resolution.urgency, &state, language);

        tracing::info!(
            category = %category,
            state = %state,
            language = language.name(),
            urgency = resolution.urgency.as_str(),
            rule = resolution.rule,
            "Rule-based classification"
        );

        Ok(ClassificationResult {
            category,
            problem_type: category.problem_type().to_string(),
            suggested_issue: category.issue_label().to_string(),
            detected_state: state,
            detected_language: language,
            urgency_level: resolution.urgency,
            confidence: resolution.confidence,
            helplines,
            recommendations,
            response_text: responses::response_text(category, language).to_string(),
            source: ClassificationSource::Rules,
        })
    }
}

#[async_trait]
impl Classifier for RuleBasedClassifier {
    async fn classify(&self, request: &ClassifyRequest) -> Result<ClassificationResult> {
        self.classify_now(request)
    }

    fn name(&self) -> &str {
        "rules"
    }
}
