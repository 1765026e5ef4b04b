//! Axum route handlers for the verse-finding API.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::RetrievalResult;
use crate::state::AppState;

/// Pulls the `lesson` string out of a parsed body. Anything that is not an
/// object with a string `lesson` yields `None` and is rejected as a missing
/// topic. Duplicate keys keep the last value.
fn lesson_of(body: &Value) -> Option<&str> {
    body.get("lesson").and_then(Value::as_str)
}

/// POST /api/find-verses
///
/// Always answers 200. The body is read as raw bytes so unreadable JSON
/// becomes an in-band error rather than an extractor rejection. Retrieval
/// runs on its own task so a panic is reported the same way.
pub async fn handle_find_verses(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RetrievalResult>, AppError> {
    let body: Value = serde_json::from_slice(&body)?;

    let retriever = state.retriever.clone();
    let result = tokio::spawn(async move { retriever.retrieve_verses(lesson_of(&body)).await })
        .await?;

    Ok(Json(result))
}
