//! Router tests against in-process state

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use janai_classifier::{
    FallbackClassifier, HelplineAssembler, InMemorySchemeCatalog, RemoteClassifier,
    RuleBasedClassifier, SchemeAdvisor,
};
use janai_config::Settings;
use janai_core::Scheme;
use janai_llm::{FinishReason, GenerationResult, LlmBackend, LlmError, Message};
use janai_server::{create_router, AppState};

fn scheme(name: &str, category: &str) -> Scheme {
    Scheme {
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{} description", name),
        eligibility: String::new(),
        benefits: String::new(),
    }
}

fn catalog() -> Arc<InMemorySchemeCatalog> {
    Arc::new(InMemorySchemeCatalog::new(vec![
        scheme("PM-KISAN", "Agricultural"),
        scheme("National Scholarship Portal", "Education"),
        scheme("Atal Pension Yojana", "Pension"),
        scheme("Pradhan Mantri Matru Vandana Yojana", "Women & Maternity"),
        scheme("Stand-Up India", "Entrepreneurship"),
        scheme("Ayushman Bharat", "Health"),
    ]))
}

fn app_with(classifier: FallbackClassifier) -> Router {
    let mut settings = Settings::default();
    settings.classifier.remote_enabled = false;
    let state = AppState::with_components(settings, classifier, SchemeAdvisor::new(catalog()), None);
    create_router(state)
}

fn app() -> Router {
    app_with(FallbackClassifier::rules_only(RuleBasedClassifier::default()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn numbers(body: &Value) -> Vec<String> {
    body["helplines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["number"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn emergency_fire() {
    let (status, body) = send(
        app(),
        post("/api/emergency/process", json!({"text": "there is a fire in my building"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "fire");
    assert_eq!(body["urgencyLevel"], "critical");
    assert_eq!(body["detectedState"], "All India");
    let numbers = numbers(&body);
    assert!(numbers.contains(&"101".to_string()));
    assert!(numbers.contains(&"112".to_string()));
}

#[tokio::test]
async fn emergency_hindi_child() {
    let (status, body) = send(
        app(),
        post(
            "/api/emergency/process",
            json!({"text": "मेरा बच्चा गुलाम बनाया जा रहा है", "inputLanguage": "hi-IN"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "child");
    assert_eq!(body["urgencyLevel"], "high");
    assert_eq!(numbers(&body)[0], "1098");
}

#[tokio::test]
async fn emergency_empty_text_is_400() {
    let (status, body) = send(app(), post("/api/emergency/process", json!({"text": "  "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("No text"));
}

#[tokio::test]
async fn emergency_malformed_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/emergency/process")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn analyze_problem_accepts_description() {
    let (status, body) = send(
        app(),
        post(
            "/api/ai/analyze-problem",
            json!({"description": "water supply has stopped in Hyderabad", "language": "en-IN"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "water");
    assert_eq!(body["detectedState"], "Telangana");
    let numbers = numbers(&body);
    assert!(numbers.contains(&"155313".to_string()));
    assert!(numbers.contains(&"1916".to_string()));
}

struct BrokenBackend;

#[async_trait]
impl LlmBackend for BrokenBackend {
    async fn generate(&self, _messages: &[Message]) -> Result<GenerationResult, LlmError> {
        Err(LlmError::Network("connection refused".to_string()))
    }

    fn model_name(&self) -> &str {
        "broken"
    }
}

struct JsonBackend;

#[async_trait]
impl LlmBackend for JsonBackend {
    async fn generate(&self, _messages: &[Message]) -> Result<GenerationResult, LlmError> {
        Ok(GenerationResult {
            text: r#"{"category": "transport", "urgencyLevel": "high", "confidence": 0.9}"#
                .to_string(),
            tokens: 20,
            total_time_ms: 3,
            finish_reason: FinishReason::Stop,
        })
    }

    fn model_name(&self) -> &str {
        "json"
    }
}

fn with_remote(backend: Arc<dyn LlmBackend>) -> FallbackClassifier {
    let remote =
        RemoteClassifier::new(backend, Duration::from_secs(1), HelplineAssembler::default());
    FallbackClassifier::new(RuleBasedClassifier::default(), Some(remote))
}

#[tokio::test]
async fn remote_failure_is_invisible_to_caller() {
    let (status, body) = send(
        app_with(with_remote(Arc::new(BrokenBackend))),
        post("/api/emergency/process", json!({"text": "there is a fire in my building"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "fire");
    assert_eq!(body["source"], "rules");
}

#[tokio::test]
async fn remote_result_is_returned() {
    let (status, body) = send(
        app_with(with_remote(Arc::new(JsonBackend))),
        post("/api/emergency/process", json!({"text": "the train is stuck"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "transport");
    assert_eq!(body["source"], "remote");
    assert!(numbers(&body).contains(&"139".to_string()));
}

#[tokio::test]
async fn helplines_for_state() {
    let (status, body) = send(app(), get("/api/helplines?state=telangana")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "Telangana");
    let numbers = numbers(&body);
    assert_eq!(numbers[0], "112");
    assert!(numbers.contains(&"155313".to_string()));
}

#[tokio::test]
async fn helplines_for_unknown_state_are_national() {
    let (status, body) = send(app(), get("/api/helplines?state=Atlantis")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "All India");
    assert!(body["helplines"]
        .as_array()
        .unwrap()
        .iter()
        .all(|h| h["scope"] == "national"));
}

#[tokio::test]
async fn web_frontend_route_names() {
    let (status, body) = send(
        app(),
        post(
            "/api/emergency/process-emergency",
            json!({"text": "there is a fire in my building"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "fire");

    let (status, body) = send(app(), get("/api/helpline?state=Kolkata")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "West Bengal");
}

#[tokio::test]
async fn helplines_require_state() {
    let (status, body) = send(app(), get("/api/helplines")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "state is required");
}

#[tokio::test]
async fn find_schemes_for_farmer() {
    let (status, body) = send(
        app(),
        post(
            "/api/schemes/find",
            json!({"name": "Ravi", "age": 42, "gender": "Male", "occupation": "Farmer"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["schemes"][0]["name"], "PM-KISAN");
}

#[tokio::test]
async fn find_schemes_requires_profile_fields() {
    let (status, body) = send(
        app(),
        post("/api/schemes/find", json!({"name": "Ravi", "age": 42})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "gender is required");
}

#[tokio::test]
async fn recommend_schemes_without_model_uses_catalog_head() {
    let (status, body) = send(
        app(),
        post(
            "/api/ai/recommend-schemes",
            json!({"problemDescription": "my crops failed this season", "language": "hi"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["recommendedSchemes"][0]["name"], "PM-KISAN");
}

#[tokio::test]
async fn recommend_schemes_requires_problem() {
    let (status, _) = send(app(), post("/api/ai/recommend-schemes", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_ready() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["remote_classifier"], "disabled");

    let (status, body) = send(app(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}
