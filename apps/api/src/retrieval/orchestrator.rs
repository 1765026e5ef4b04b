//! Verse retrieval pipeline: topic in, `RetrievalResult` out, whatever happens.
//!
//! Pipeline: validate → prompt → model call → sanitize → parse.
//! Each failure is handled exactly once; there is no retry loop.
//!
//! | Failure                | Verses             | Surfaced to caller      |
//! |------------------------|--------------------|-------------------------|
//! | blank / missing topic  | none               | `error`                 |
//! | no credential          | none               | `error`                 |
//! | model call failed      | knowledge base     | `error` + `details`     |
//! | unparseable response   | knowledge base     | nothing (logged only)   |

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::RetrievalError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::RetrievalResult;
use crate::retrieval::prompts::build_prompt;
use crate::retrieval::response::parse_model_response;
use crate::retrieval::sanitizer::clean;

/// Coordinates one verse retrieval per call. Cheap to clone; holds no
/// per-request state.
#[derive(Clone)]
pub struct VerseRetriever {
    /// `None` when no model credential is configured.
    model: Option<Arc<dyn TextGenerator>>,
}

impl VerseRetriever {
    pub fn new(model: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { model }
    }

    pub fn is_model_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Runs the full pipeline for `topic`. Never fails: every outcome is
    /// expressed in the returned envelope.
    pub async fn retrieve_verses(&self, topic: Option<&str>) -> RetrievalResult {
        let span = info_span!("retrieve_verses", request_id = %Uuid::new_v4());

        async move {
            let topic = topic.unwrap_or_default();
            match self.try_retrieve(topic).await {
                Ok(result) => {
                    info!(verses = result.verses.len(), "Verses retrieved from model");
                    result
                }
                Err(e) => {
                    match &e {
                        RetrievalError::InvalidInput => warn!("Rejected request without a topic"),
                        RetrievalError::ConfigurationMissing(_) => {
                            error!("GEMINI_API_KEY is not set; returning without verses")
                        }
                        RetrievalError::ModelCallFailed(cause) => {
                            warn!("Model call failed, serving fallback verses: {cause}")
                        }
                        RetrievalError::ResponseUnparseable(reason) => {
                            error!("Model response unparseable, serving fallback verses: {reason}")
                        }
                        RetrievalError::Unexpected(details) => {
                            error!("Unexpected retrieval failure: {details}")
                        }
                    }
                    e.into_result(topic)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_retrieve(&self, topic: &str) -> Result<RetrievalResult, RetrievalError> {
        if topic.trim().is_empty() {
            return Err(RetrievalError::InvalidInput);
        }

        let model = self
            .model
            .as_ref()
            .ok_or_else(|| RetrievalError::ConfigurationMissing(LlmError::Unavailable.to_string()))?;

        let prompt = build_prompt(topic);

        info!("Calling model for topic {topic:?}");
        let raw = model.generate(&prompt).await?;

        let cleaned = clean(&raw);
        debug!("Cleaned model response: {cleaned}");

        let parsed = parse_model_response(&cleaned)
            .inspect_err(|_| debug!("Raw model response: {raw}"))?;

        Ok(RetrievalResult::found(
            parsed.topic.unwrap_or_else(|| topic.to_string()),
            parsed.verses,
        ))
    }
}
