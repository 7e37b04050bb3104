//! Remote model classifier
//!
//! One model call per request under a hard deadline, no retries. The reply
//! is scanned for a JSON object which is read leniently; anything missing is
//! backfilled locally and the helplines always go through the assembler.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::{Map, Value};

use janai_config::Settings;
use janai_core::{
    Category, ClassificationResult, ClassificationSource, Classifier, ClassifyRequest,
    HelplineRecord, Language, Scope, UrgencyLevel,
};
use janai_llm::{LlmBackend, LlmFactory, PromptBuilder};

use crate::assembler::HelplineAssembler;
use crate::gazetteer::Gazetteer;
use crate::responses;
use crate::ClassifierError;

/// Confidence reported when the model gives none
const DEFAULT_CONFIDENCE: f32 = 0.7;

pub struct RemoteClassifier {
    backend: Arc<dyn LlmBackend>,
    timeout: Duration,
    assembler: HelplineAssembler,
    gazetteer: Gazetteer,
}

impl RemoteClassifier {
    pub fn new(backend: Arc<dyn LlmBackend>, timeout: Duration, assembler: HelplineAssembler) -> Self {
        Self {
            backend,
            timeout,
            assembler,
            gazetteer: Gazetteer::new(),
        }
    }

    /// Build from settings; fails when no credential is configured
    pub fn from_settings(settings: &Settings) -> Result<Self, ClassifierError> {
        let timeout = Duration::from_millis(settings.classifier.remote_timeout_ms);
        let backend = LlmFactory::create(&settings.llm, timeout)?;
        Ok(Self::new(
            backend,
            timeout,
            HelplineAssembler::new(settings.classifier.max_helplines),
        ))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Classify a validated request through the model
    pub async fn analyze(
        &self,
        request: &ClassifyRequest,
    ) -> Result<ClassificationResult, ClassifierError> {
        let language = request.language();
        let messages = PromptBuilder::new()
            .classification_system()
            .classification_request(&request.text, language, request.state.as_deref())
            .build();

        let start = Instant::now();
        let generation = tokio::time::timeout(self.timeout, self.backend.generate(&messages))
            .await
            .map_err(|_| ClassifierError::Timeout(self.timeout.as_millis() as u64))??;

        tracing::debug!(
            model = %self.backend.model_name(),
            tokens = generation.tokens,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Remote model replied"
        );

        let analysis = extract_json(&generation.text)?;
        Ok(self.backfill(request, &analysis))
    }

    /// Turn the model's JSON into a complete result
    fn backfill(&self, request: &ClassifyRequest, analysis: &Map<String, Value>) -> ClassificationResult {
        let category = ["category", "emergencyType", "problemType", "suggestedIssue"]
            .iter()
            .find_map(|key| non_empty_str(analysis, key))
            .map(Category::from_str_loose)
            .unwrap_or_default();

        let state = ["detectedState", "suggestedState"]
            .iter()
            .find_map(|key| non_empty_str(analysis, key))
            .and_then(|s| self.gazetteer.normalize(s))
            .map(str::to_string)
            .unwrap_or_else(|| {
                self.gazetteer
                    .resolve(&request.text, request.state.as_deref())
            });

        let language = match request.input_language {
            Some(_) => request.language(),
            None => non_empty_str(analysis, "detectedLanguage")
                .and_then(Language::from_str_loose)
                .unwrap_or_else(|| request.language()),
        };

        let urgency = ["urgencyLevel", "priority"]
            .iter()
            .find_map(|key| non_empty_str(analysis, key))
            .and_then(UrgencyLevel::from_str_loose)
            .unwrap_or_default();

        let confidence = analysis
            .get("confidence")
            .and_then(Value::as_f64)
            .filter(|c| c.is_finite())
            .map(|c| (c as f32).clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_CONFIDENCE);

        let suggested: Vec<HelplineRecord> = ["helplines", "helplineNumbers"]
            .iter()
            .find_map(|key| analysis.get(*key).and_then(Value::as_array))
            .map(|items| items.iter().filter_map(parse_helpline).collect())
            .unwrap_or_default();
        let helplines = self.assembler.assemble(category, &state, &suggested);

        let recommendations: Vec<String> = analysis
            .get("recommendations")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let recommendations = if recommendations.is_empty() {
            responses::recommendations(category, urgency, &state, language)
        } else {
            recommendations
        };

        let response_text = ["responseText", "translatedResponse"]
            .iter()
            .find_map(|key| non_empty_str(analysis, key))
            .map(str::to_string)
            .unwrap_or_else(|| responses::response_text(category, language).to_string());

        let problem_type = non_empty_str(analysis, "problemType")
            .map(str::to_string)
            .unwrap_or_else(|| category.problem_type().to_string());

        let suggested_issue = analysis
            .get("suggestedIssue")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        tracing::info!(
            category = %category,
            state = %state,
            language = language.name(),
            suggested = suggested.len(),
            "Remote classification"
        );

        ClassificationResult {
            category,
            problem_type,
            suggested_issue,
            detected_state: state,
            detected_language: language,
            urgency_level: urgency,
            confidence,
            helplines,
            recommendations,
            response_text,
            source: ClassificationSource::Remote,
        }
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, request: &ClassifyRequest) -> janai_core::Result<ClassificationResult> {
        request.validate()?;
        Ok(self.analyze(request).await?)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// Find the outermost JSON object in model output, from the first `{` to
/// the last `}`
pub fn extract_json(text: &str) -> Result<Map<String, Value>, ClassifierError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let slice = match (start, end) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => return Err(ClassifierError::Parse("no JSON object in reply".to_string())),
    };

    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ClassifierError::Parse("reply is not a JSON object".to_string())),
        Err(e) => Err(ClassifierError::Parse(e.to_string())),
    }
}

fn non_empty_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Read one suggested helpline; records without a number are dropped
fn parse_helpline(value: &Value) -> Option<HelplineRecord> {
    let obj = value.as_object()?;
    let number = match obj.get("number")? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if number.is_empty() {
        return None;
    }

    let text = |key: &str| non_empty_str(obj, key).unwrap_or_default().to_string();
    let scope = non_empty_str(obj, "scope")
        .or_else(|| non_empty_str(obj, "state"))
        .map(|s| Scope::from(s.to_string()))
        .unwrap_or(Scope::National);

    Some(HelplineRecord {
        number,
        name: text("name"),
        category: non_empty_str(obj, "type")
            .map(Category::from_str_loose)
            .unwrap_or_default(),
        description: text("description"),
        availability: non_empty_str(obj, "availability")
            .unwrap_or("24/7")
            .to_string(),
        scope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use janai_llm::{FinishReason, GenerationResult, LlmError, Message};
    use janai_core::ALL_INDIA;

    struct CannedBackend {
        reply: String,
    }

    #[async_trait]
    impl LlmBackend for CannedBackend {
        async fn generate(&self, _messages: &[Message]) -> Result<GenerationResult, LlmError> {
            Ok(GenerationResult {
                text: self.reply.clone(),
                tokens: 0,
                total_time_ms: 0,
                finish_reason: FinishReason::Stop,
            })
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn classifier(reply: &str) -> RemoteClassifier {
        RemoteClassifier::new(
            Arc::new(CannedBackend {
                reply: reply.to_string(),
            }),
            Duration::from_secs(1),
            HelplineAssembler::default(),
        )
    }

    #[test]
    fn test_extract_json_from_prose() {
        let map = extract_json("Sure! Here it is:\n```json\n{\"category\": \"water\"}\n```").unwrap();
        assert_eq!(map["category"], "water");
    }

    #[test]
    fn test_extract_json_failures() {
        assert!(matches!(extract_json("no json here"), Err(ClassifierError::Parse(_))));
        assert!(matches!(extract_json("} backwards {"), Err(ClassifierError::Parse(_))));
        assert!(matches!(extract_json("{not: valid}"), Err(ClassifierError::Parse(_))));
    }

    #[test]
    fn test_parse_helpline_lenient() {
        let record = parse_helpline(&serde_json::json!({
            "number": 1916,
            "name": "Water Supply",
            "type": "Water Supply",
            "state": "All India"
        }))
        .unwrap();
        assert_eq!(record.number, "1916");
        assert_eq!(record.category, Category::Water);
        assert_eq!(record.availability, "24/7");
        assert!(record.scope.is_national());

        assert!(parse_helpline(&serde_json::json!({"name": "no number"})).is_none());
        assert!(parse_helpline(&serde_json::json!({"number": " "})).is_none());
    }

    #[tokio::test]
    async fn test_full_reply() {
        let reply = r#"{
            "category": "child",
            "problemType": "Child Protection",
            "suggestedIssue": "Child Help",
            "detectedState": "Telangana",
            "detectedLanguage": "Telugu",
            "urgencyLevel": "high",
            "confidence": 0.92,
            "helplines": [{"number": "1098", "name": "Childline", "type": "child"}],
            "recommendations": ["Call 1098 now"],
            "responseText": "వెంటనే 1098 కు కాల్ చేయండి"
        }"#;
        let result = classifier(reply)
            .analyze(&ClassifyRequest::new("child labour at a shop"))
            .await
            .unwrap();

        assert_eq!(result.category, Category::Child);
        assert_eq!(result.detected_state, "Telangana");
        assert_eq!(result.detected_language, Language::Telugu);
        assert_eq!(result.urgency_level, UrgencyLevel::High);
        assert!((result.confidence - 0.92).abs() < 1e-6);
        assert_eq!(result.recommendations, vec!["Call 1098 now".to_string()]);
        assert_eq!(result.source, ClassificationSource::Remote);
        assert_eq!(result.helplines[0].number, "1098");
        assert!(result.has_number("112"));
    }

    #[tokio::test]
    async fn test_sparse_reply_is_backfilled() {
        let result = classifier("{}")
            .analyze(&ClassifyRequest::new("पानी नहीं आ रहा, हैदराबाद"))
            .await
            .unwrap();

        assert_eq!(result.category, Category::General);
        assert_eq!(result.urgency_level, UrgencyLevel::Medium);
        assert_eq!(result.suggested_issue, "");
        assert_eq!(result.detected_state, "Telangana");
        assert_eq!(result.detected_language, Language::Hindi);
        assert_eq!(
            result.response_text,
            responses::response_text(Category::General, Language::Hindi)
        );
        assert!((result.confidence - DEFAULT_CONFIDENCE).abs() < f32::EPSILON);
        assert!(result.has_number("112"));
    }

    #[tokio::test]
    async fn test_unknown_state_falls_back_to_caller_state() {
        let result = classifier(r#"{"category": "fire", "detectedState": "Gondor"}"#)
            .analyze(&ClassifyRequest::new("fire").with_state("Kerala"))
            .await
            .unwrap();
        assert_eq!(result.detected_state, "Kerala");

        let result = classifier(r#"{"category": "fire"}"#)
            .analyze(&ClassifyRequest::new("fire"))
            .await
            .unwrap();
        assert_eq!(result.detected_state, ALL_INDIA);
    }

    #[tokio::test]
    async fn test_legacy_field_names() {
        let reply = r#"{"emergencyType": "women", "priority": "Critical",
            "helplineNumbers": [{"number": "181", "type": "women"}],
            "translatedResponse": "Call 181"}"#;
        let result = classifier(reply)
            .analyze(&ClassifyRequest::new("help"))
            .await
            .unwrap();
        assert_eq!(result.category, Category::Women);
        assert_eq!(result.urgency_level, UrgencyLevel::Critical);
        assert_eq!(result.response_text, "Call 181");
        assert!(result.has_number("181"));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_an_error() {
        let err = classifier("I cannot help with that")
            .analyze(&ClassifyRequest::new("fire"))
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "parse");
    }

    #[test]
    fn test_from_settings_requires_key() {
        let mut settings = Settings::default();
        settings.llm.api_key = None;
        let err = RemoteClassifier::from_settings(&settings).err().unwrap();
        assert_eq!(err.reason(), "missing_credential");
    }
}
