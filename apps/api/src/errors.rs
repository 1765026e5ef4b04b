use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::RetrievalResult;
use crate::retrieval::knowledge_base;

pub const TOPIC_REQUIRED: &str = "Topic is required";
pub const MODEL_DEGRADED: &str =
    "We encountered an issue generating AI responses. Using educational reference material instead.";
pub const PROCESSING_FAILED: &str = "Failed to process request";

/// Every way a retrieval can fall short of a parsed model answer.
///
/// `into_result` is the only place that decides which kinds fall back to
/// curated verses and which surface details to the caller.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Topic is required")]
    InvalidInput,

    #[error("{0}")]
    ConfigurationMissing(String),

    #[error("Model call failed: {0}")]
    ModelCallFailed(#[from] LlmError),

    #[error("Model response could not be parsed: {0}")]
    ResponseUnparseable(String),

    #[error("{0}")]
    Unexpected(String),
}

impl RetrievalError {
    pub fn into_result(self, topic: &str) -> RetrievalResult {
        match self {
            RetrievalError::InvalidInput => {
                RetrievalResult::found("", vec![]).with_error(TOPIC_REQUIRED)
            }
            RetrievalError::ConfigurationMissing(message) => {
                // No fallback here, unlike a failed call.
                RetrievalResult::found(topic, vec![]).with_error(message)
            }
            RetrievalError::ModelCallFailed(e) => {
                RetrievalResult::found(topic, knowledge_base::lookup(topic))
                    .with_error(MODEL_DEGRADED)
                    .with_details(e.to_string())
            }
            RetrievalError::ResponseUnparseable(_) => {
                RetrievalResult::found(topic, knowledge_base::lookup(topic))
            }
            RetrievalError::Unexpected(details) => RetrievalResult::found("", vec![])
                .with_error(PROCESSING_FAILED)
                .with_details(details),
        }
    }
}

/// Failures outside the retrieval pipeline itself (unreadable body, crashed task).
/// Implements `IntoResponse` so handlers can return `Result<T, AppError>`.
///
/// Always rendered as HTTP 200 with an in-band error envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("{0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidBody(e) => tracing::error!("Unreadable request body: {e}"),
            AppError::TaskFailed(e) => tracing::error!("Retrieval task failed: {e}"),
        }

        let body = RetrievalError::Unexpected(self.to_string()).into_result("");
        (StatusCode::OK, Json(body)).into_response()
    }
}
