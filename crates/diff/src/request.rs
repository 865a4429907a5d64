//! Request and response envelopes for callers that speak JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classifier::ChangeAnalysis;
use crate::error::DiffError;
use crate::segment::DiffSegment;
use crate::service::DiffOutcome;
use crate::smart_diff::DiffStrategy;

/// `{"oldText": ..., "newText": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub old_text: String,
    pub new_text: String,
}

impl DiffRequest {
    pub fn new(old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }

    /// Parse a request body, rejecting missing or non-string fields
    pub fn from_json(body: &str) -> Result<Self, DiffError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| DiffError::invalid("body", format!("malformed JSON: {}", e)))?;
        let object = value
            .as_object()
            .ok_or_else(|| DiffError::invalid("body", "expected a JSON object"))?;

        Ok(Self {
            old_text: string_field(object, "oldText")?,
            new_text: string_field(object, "newText")?,
        })
    }
}

fn string_field(object: &Map<String, Value>, field: &str) -> Result<String, DiffError> {
    match object.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(DiffError::invalid(
            field,
            format!("expected a string, found {}", json_type(other)),
        )),
        None => Err(DiffError::invalid(field, "missing field")),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `{"segments": [...], "analysis": {...}, "strategy": ..., "cached": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResponse {
    pub segments: Vec<DiffSegment>,
    pub analysis: ChangeAnalysis,
    pub strategy: DiffStrategy,
    pub cached: bool,
}

impl From<DiffOutcome> for DiffResponse {
    fn from(outcome: DiffOutcome) -> Self {
        Self {
            segments: outcome.segments,
            analysis: outcome.analysis,
            strategy: outcome.strategy,
            cached: outcome.cached,
        }
    }
}
