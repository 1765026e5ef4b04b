use serde::{Deserialize, Serialize};

/// A single scripture suggestion shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Human-readable citation, e.g. "John 3:16".
    pub reference: String,
    pub text: String,
    /// One sentence relating the verse to the requested topic.
    pub explanation: String,
}

/// Response envelope for every outcome of `POST /api/find-verses`.
///
/// `success` is always `true`; degraded outcomes are reported in-band through
/// `error` / `details`, and callers must check those alongside `verses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub success: bool,
    pub lesson: String,
    pub verses: Vec<Verse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RetrievalResult {
    pub fn found(lesson: impl Into<String>, verses: Vec<Verse>) -> Self {
        Self {
            success: true,
            lesson: lesson.into(),
            verses,
            error: None,
            details: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
