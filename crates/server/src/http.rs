//! HTTP Endpoints
//!
//! REST API for classification, helplines and schemes.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use janai_classifier::{directory, Gazetteer};
use janai_core::{
    ClassificationResult, Classifier, ClassifyRequest, Language, UserProfile, ALL_INDIA,
};

use crate::metrics::{metrics_handler, record_request};
use crate::state::AppState;
use crate::{ServerError, EMERGENCY_FAILURE_MESSAGE};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let (cors_layer, timeout) = {
        let config = state.get_config();
        (
            build_cors_layer(&config.server.cors_origins, config.server.cors_enabled),
            Duration::from_secs(config.server.timeout_seconds),
        )
    };

    Router::new()
        // Classification
        .route("/api/emergency/process", post(process_emergency))
        .route("/api/emergency/process-emergency", post(process_emergency))
        .route("/api/ai/analyze-problem", post(analyze_problem))
        // Directory
        .route("/api/helplines", get(list_helplines))
        .route("/api/helpline", get(list_helplines))
        // Schemes
        .route("/api/schemes/find", post(find_schemes))
        .route("/api/ai/recommend-schemes", post(recommend_schemes))
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .route("/admin/reload-config", post(reload_config))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// Disabled CORS is permissive. With no valid origins configured, only
/// localhost:3000 is allowed.
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to {}", DEFAULT_CORS_ORIGIN);
        return cors.allow_origin(HeaderValue::from_static(DEFAULT_CORS_ORIGIN));
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    cors.allow_origin(parsed_origins)
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServerError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))
}

/// Classify one request on behalf of either classification endpoint
async fn classify(
    state: &AppState,
    request: ClassifyRequest,
    endpoint: &'static str,
) -> Result<Json<ClassificationResult>, ServerError> {
    record_request(endpoint);
    request.validate()?;

    let request_id = uuid::Uuid::new_v4();
    let classifier = state.classifier();
    let span = tracing::info_span!("classify", %request_id, endpoint);

    match classifier.classify(&request).instrument(span).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_input_error() => Err(e.into()),
        Err(e) => {
            tracing::error!(%request_id, error = %e, "Emergency processing failed");
            Err(ServerError::Internal(EMERGENCY_FAILURE_MESSAGE.to_string()))
        }
    }
}

/// POST /api/emergency/process
async fn process_emergency(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassificationResult>, ServerError> {
    classify(&state, json_body(payload)?, "emergency").await
}

/// POST /api/ai/analyze-problem
///
/// Same engine, accepts `description` and `language` field names.
async fn analyze_problem(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassificationResult>, ServerError> {
    classify(&state, json_body(payload)?, "analyze").await
}

#[derive(Debug, Deserialize)]
struct HelplineQuery {
    state: Option<String>,
}

/// GET /api/helplines?state=X
///
/// National baseline plus the state's records. Unknown states get the
/// national baseline alone.
async fn list_helplines(
    Query(query): Query<HelplineQuery>,
) -> Result<Json<serde_json::Value>, ServerError> {
    record_request("helplines");

    let requested = query
        .state
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("state is required".to_string()))?;

    let (state, helplines) = match Gazetteer::new().normalize(requested) {
        Some(canonical) => (canonical, directory::directory_for_state(canonical)),
        None => {
            tracing::debug!(state = %requested, "Unknown state, listing national helplines");
            (ALL_INDIA, directory::national_baseline().to_vec())
        }
    };

    Ok(Json(serde_json::json!({
        "state": state,
        "total": helplines.len(),
        "helplines": helplines,
    })))
}

/// POST /api/schemes/find
async fn find_schemes(
    State(state): State<AppState>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ServerError> {
    record_request("schemes_find");
    let profile = json_body(payload)?;

    let schemes = state.schemes().find(&profile)?;

    Ok(Json(serde_json::json!({
        "total": schemes.len(),
        "schemes": schemes,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest {
    #[serde(default)]
    problem_description: String,
    #[serde(default)]
    user_profile: Option<UserProfile>,
    #[serde(default)]
    language: Option<String>,
}

/// POST /api/ai/recommend-schemes
async fn recommend_schemes(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ServerError> {
    record_request("schemes_recommend");
    let request = json_body(payload)?;

    let language = Language::resolve(request.language.as_deref(), &request.problem_description);
    let advisor = state.schemes();
    let schemes = advisor
        .recommend(
            &request.problem_description,
            request.user_profile.as_ref(),
            language,
        )
        .await?;

    Ok(Json(serde_json::json!({
        "total": schemes.len(),
        "recommendedSchemes": schemes,
    })))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let remote = state.classifier().remote_enabled();
    let ranking = state.schemes().ranking_enabled();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "checks": {
                "rules": "ok",
                "remote_classifier": if remote { "enabled" } else { "disabled" },
                "scheme_ranking": if ranking { "enabled" } else { "disabled" },
            },
        })),
    )
}

/// Readiness check
///
/// The keyword rules need no external dependency, so the service is ready
/// as soon as it is serving.
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let environment = state.get_config().environment;

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "environment": environment,
            "remote_classifier": state.classifier().remote_enabled(),
        })),
    )
}

/// POST /admin/reload-config
async fn reload_config(State(state): State<AppState>) -> impl IntoResponse {
    match state.reload_config() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Configuration reloaded successfully"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Config reload failed: {}", e);
            ServerError::Internal(e).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janai_config::Settings;

    #[test]
    fn test_router_creation() {
        let mut settings = Settings::default();
        settings.classifier.remote_enabled = false;
        let _ = create_router(AppState::new(settings));
    }

    #[test]
    fn test_cors_layer_variants() {
        let _ = build_cors_layer(&[], true);
        let _ = build_cors_layer(&["not a header\n".to_string()], true);
        let _ = build_cors_layer(&["http://localhost:5173".to_string()], true);
        let _ = build_cors_layer(&[], false);
    }
}
