//! Parse-then-validate boundary for model output.
//!
//! The sanitized text is parsed as JSON first, then checked against the
//! requested shape `{ topic?: string, verses?: [Verse] }`. Verse entries that
//! lack a required string field are dropped; valid entries pass through as-is.

use serde_json::Value;
use tracing::warn;

use crate::errors::RetrievalError;
use crate::models::Verse;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// Model's echo of the topic, when present and non-empty.
    pub topic: Option<String>,
    pub verses: Vec<Verse>,
}

pub fn parse_model_response(cleaned: &str) -> Result<ParsedResponse, RetrievalError> {
    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| RetrievalError::ResponseUnparseable(e.to_string()))?;

    let Value::Object(mut object) = value else {
        return Err(RetrievalError::ResponseUnparseable(
            "expected a JSON object".to_string(),
        ));
    };

    let topic = match object.remove("topic") {
        Some(Value::String(t)) if !t.is_empty() => Some(t),
        _ => None,
    };

    let entries = match object.remove("verses") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(RetrievalError::ResponseUnparseable(
                "'verses' is not an array".to_string(),
            ))
        }
    };

    let total = entries.len();
    let verses: Vec<Verse> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<Verse>(entry) {
            Ok(verse) => Some(verse),
            Err(e) => {
                warn!("Dropping malformed verse #{i} from model response: {e}");
                None
            }
        })
        .collect();

    if total > 0 && verses.is_empty() {
        return Err(RetrievalError::ResponseUnparseable(format!(
            "none of the {total} verse entries had reference, text and explanation"
        )));
    }

    Ok(ParsedResponse { topic, verses })
}
