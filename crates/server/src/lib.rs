//! JanAI Server
//!
//! HTTP endpoints for emergency classification, helpline lookup and scheme
//! recommendation.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use metrics::{init_metrics, record_request};
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned whenever emergency processing itself fails
pub const EMERGENCY_FAILURE_MESSAGE: &str =
    "Emergency processing failed. Please call 112 for immediate assistance.";

/// Server errors
///
/// The message of every variant is what the caller sees.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        err.status()
    }
}

/// Input errors keep their message; anything else is logged and replaced
/// with a generic one
impl From<janai_core::Error> for ServerError {
    fn from(err: janai_core::Error) -> Self {
        match err {
            janai_core::Error::InvalidInput(message) => ServerError::InvalidRequest(message),
            other => {
                tracing::error!(error = %other, "Request failed");
                ServerError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({
                "success": false,
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
