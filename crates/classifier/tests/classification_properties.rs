//! End-to-end properties of the classification engine

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use janai_classifier::{
    FallbackClassifier, HelplineAssembler, RemoteClassifier, RuleBasedClassifier,
};
use janai_core::{
    Category, ClassificationResult, ClassificationSource, Classifier, ClassifyRequest,
    UrgencyLevel, ALL_INDIA,
};
use janai_llm::{FinishReason, GenerationResult, LlmBackend, LlmError, Message};

const CORPUS: &[&str] = &[
    "there is a fire in my building",
    "water supply has stopped in Hyderabad",
    "मेरा बच्चा गुलाम बनाया जा रहा है",
    "someone keeps harassing a woman near the bus stop",
    "a lady and her baby are stuck in the lift",
    "my phone was stolen in Mumbai",
    "need an ambulance, he is unconscious",
    "no electricity in Delhi since morning",
    "our bus had an accident on the highway",
    "நீர் வரவில்லை",
    "కరెంట్ లేదు",
    "আগুন লেগেছে কলকাতায়",
    "I want to know about pension",
    "women harassment in Hyderabad near the metro station",
];

fn rules() -> RuleBasedClassifier {
    RuleBasedClassifier::default()
}

async fn classify(classifier: &dyn Classifier, text: &str) -> ClassificationResult {
    classifier
        .classify(&ClassifyRequest::new(text))
        .await
        .unwrap()
}

#[tokio::test]
async fn fire_without_state_is_critical_and_national() {
    let result = classify(&rules(), "there is a fire in my building").await;

    assert_eq!(result.category, Category::Fire);
    assert_eq!(result.urgency_level, UrgencyLevel::Critical);
    assert_eq!(result.detected_state, ALL_INDIA);
    assert!(result.has_number("101"));
    assert!(result.has_number("112"));
    assert!(result.helplines.iter().all(|h| h.scope.is_national()));
}

#[tokio::test]
async fn hyderabad_water_lists_state_and_national_boards() {
    let result = classify(&rules(), "water supply has stopped in Hyderabad").await;

    assert_eq!(result.category, Category::Water);
    assert_eq!(result.detected_state, "Telangana");
    assert!(result.has_number("155313"));
    assert!(result.has_number("1916"));
}

#[tokio::test]
async fn hindi_child_slavery_goes_to_childline() {
    let result = classify(&rules(), "मेरा बच्चा गुलाम बनाया जा रहा है").await;

    assert_eq!(result.category, Category::Child);
    assert_eq!(result.urgency_level, UrgencyLevel::High);
    assert!(result.has_number("1098"));
}

#[tokio::test]
async fn native_script_city_with_case_suffix_sets_state() {
    let result = classify(&rules(), "আগুন লেগেছে কলকাতায়").await;

    assert_eq!(result.category, Category::Fire);
    assert_eq!(result.detected_state, "West Bengal");
    assert_eq!(result.detected_language, janai_core::Language::Bengali);

    let result = classify(&rules(), "சென்னையில் தண்ணீர் வரவில்லை").await;
    assert_eq!(result.detected_state, "Tamil Nadu");
}

#[tokio::test]
async fn child_terms_always_win() {
    for text in [
        "a lady and her baby are stuck in the lift",
        "my daughter is a minor and a man is harassing her",
        "एक लड़की को परेशान किया जा रहा है",
        "child is being beaten, call the police",
    ] {
        let result = classify(&rules(), text).await;
        assert_eq!(result.category, Category::Child, "{text}");
        assert!(result.has_number("1098"), "{text}");
    }
}

#[tokio::test]
async fn women_cues_without_lexicon_hit() {
    let result = classify(&rules(), "someone keeps harassing a woman near the bus stop").await;
    assert_eq!(result.category, Category::Women);
    assert_eq!(result.helplines[0].number, "1091");
}

#[tokio::test]
async fn helplines_are_unique_capped_and_carry_112() {
    let classifier = rules();
    for text in CORPUS {
        let result = classify(&classifier, text).await;

        assert!(!result.helplines.is_empty(), "{text}");
        assert!(result.helplines.len() <= classifier.assembler().cap(), "{text}");
        assert!(result.has_number("112"), "{text}");

        let numbers: HashSet<_> = result.helplines.iter().map(|h| h.number.as_str()).collect();
        assert_eq!(numbers.len(), result.helplines.len(), "{text}");
    }
}

#[tokio::test]
async fn classification_is_idempotent() {
    let classifier = rules();
    for text in CORPUS {
        let request = ClassifyRequest::new(*text).with_state("Karnataka");
        let first = classifier.classify(&request).await.unwrap();
        let second = classifier.classify(&request).await.unwrap();
        assert_eq!(first, second, "{text}");
    }
}

#[tokio::test]
async fn empty_text_is_rejected() {
    for text in ["", "   ", "\n\t"] {
        let err = rules()
            .classify(&ClassifyRequest::new(text))
            .await
            .unwrap_err();
        assert!(err.is_input_error());
    }
}

// ---------------------------------------------------------------------------
// Remote and fallback paths
// ---------------------------------------------------------------------------

enum Behaviour {
    Reply(&'static str),
    Fail,
    Hang,
}

struct ScriptedBackend(Behaviour);

#[async_trait]
impl LlmBackend for ScriptedBackend {
    async fn generate(&self, _messages: &[Message]) -> Result<GenerationResult, LlmError> {
        match &self.0 {
            Behaviour::Reply(text) => Ok(GenerationResult {
                text: text.to_string(),
                tokens: 12,
                total_time_ms: 5,
                finish_reason: FinishReason::Stop,
            }),
            Behaviour::Fail => Err(LlmError::Api("HTTP 503: unavailable".to_string())),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(LlmError::Timeout)
            }
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn fallback(behaviour: Behaviour) -> FallbackClassifier {
    let remote = RemoteClassifier::new(
        Arc::new(ScriptedBackend(behaviour)),
        Duration::from_millis(50),
        HelplineAssembler::default(),
    );
    FallbackClassifier::new(rules(), Some(remote))
}

#[tokio::test]
async fn valid_remote_reply_is_used() {
    let classifier = fallback(Behaviour::Reply(
        r#"Analysis: {"category": "electricity", "urgencyLevel": "medium",
        "detectedState": "Delhi", "confidence": 0.88,
        "helplines": [{"number": "19123", "name": "BSES Rajdhani", "type": "electricity", "scope": "Delhi"}]}"#,
    ));

    let result = classify(&classifier, "no power at home").await;
    assert_eq!(result.source, ClassificationSource::Remote);
    assert_eq!(result.category, Category::Electricity);
    assert_eq!(result.detected_state, "Delhi");
    assert_eq!(result.helplines[0].number, "1912");
    assert!(result.has_number("19123"));
    assert!(result.has_number("112"));
    assert!(!result.recommendations.is_empty());
}

#[tokio::test]
async fn malformed_remote_reply_falls_back() {
    let classifier = fallback(Behaviour::Reply("Sorry, I cannot classify that."));
    let result = classify(&classifier, "there is a fire in my building").await;

    assert_eq!(result.source, ClassificationSource::Rules);
    assert_eq!(result.category, Category::Fire);
}

#[tokio::test]
async fn remote_error_falls_back() {
    let classifier = fallback(Behaviour::Fail);
    let result = classify(&classifier, "water supply has stopped in Hyderabad").await;

    assert_eq!(result.source, ClassificationSource::Rules);
    assert_eq!(result.detected_state, "Telangana");
}

#[tokio::test]
async fn slow_remote_times_out_and_falls_back() {
    let classifier = fallback(Behaviour::Hang);

    let started = std::time::Instant::now();
    let result = classify(&classifier, "मेरा बच्चा गुलाम बनाया जा रहा है").await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(result.source, ClassificationSource::Rules);
    assert_eq!(result.category, Category::Child);
}

#[tokio::test]
async fn missing_credential_uses_rules() {
    let mut settings = janai_config::Settings::default();
    settings.classifier.remote_enabled = true;
    settings.llm.api_key = None;

    let classifier = FallbackClassifier::from_settings(&settings);
    assert!(!classifier.remote_enabled());

    let result = classify(&classifier, "there is a fire in my building").await;
    assert_eq!(result.source, ClassificationSource::Rules);
}
