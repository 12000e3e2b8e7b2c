//! Pulls the model's text out of a raw completion body and parses it as JSON.
//!
//! The model is told to emit bare JSON, but its output is treated as
//! untrusted: anything that is not valid JSON fails closed. No fence
//! stripping or other repair is attempted.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unexpected response format from OpenAI")]
    UnexpectedFormat,

    #[error("OpenAI response missing content")]
    MissingContent,

    #[error("Failed to parse JSON from model response")]
    InvalidJson(#[source] serde_json::Error),
}

/// Only `choices` is decoded up front. Individual choices stay untyped so a
/// malformed later choice cannot fail an otherwise usable first one.
#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<Value>,
}

/// Returns the assistant text of the first choice.
pub fn extract_content(raw_body: &str) -> Result<String, ExtractError> {
    let body: CompletionBody =
        serde_json::from_str(raw_body).map_err(|_| ExtractError::UnexpectedFormat)?;

    let first = body.choices.first().ok_or(ExtractError::UnexpectedFormat)?;

    first
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(ExtractError::MissingContent)
}

/// Parses model text into an opaque JSON value. Any syntactically valid JSON passes.
pub fn parse_model_json(text: &str) -> Result<Value, ExtractError> {
    serde_json::from_str(text).map_err(ExtractError::InvalidJson)
}

/// `extract_content` followed by `parse_model_json`.
pub fn extract_analysis(raw_body: &str) -> Result<Value, ExtractError> {
    let text = extract_content(raw_body)?;
    parse_model_json(&text)
}
