//! Provider Payload Access
//!
//! Decoding of raw payloads (plain or string-escaped JSON) and dotted-path
//! field reads over the decoded tree.

use serde_json::Value;

use super::error::{IngestionError, Result};

/// Decode a payload, unescaping one level when it arrives as a JSON string.
pub fn decode(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::EmptyPayload);
    }
    match serde_json::from_str::<Value>(trimmed)? {
        Value::String(inner) => Ok(serde_json::from_str(inner.trim())?),
        value => Ok(value),
    }
}

/// Text at a dotted path such as `Result.Detail.HotelName`.
///
/// Numbers come back as their decimal text and objects or arrays as JSON
/// text. Missing, null and blank values are `None`.
pub fn text_at(root: &Value, path: &str) -> Option<String> {
    let node = path
        .split('.')
        .try_fold(root, |node, key| node.get(key))?;
    let text = match node {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}

pub fn first_non_blank(a: Option<String>, b: Option<String>) -> Option<String> {
    a.filter(|s| !s.trim().is_empty())
        .or_else(|| b.filter(|s| !s.trim().is_empty()))
}

/// Join the present parts with `", "`.
pub fn join_non_blank(a: Option<String>, b: Option<String>) -> Option<String> {
    match (first_non_blank(a, None), first_non_blank(b, None)) {
        (Some(a), Some(b)) => Some(format!("{}, {}", a, b)),
        (a, b) => a.or(b),
    }
}
