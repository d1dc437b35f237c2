//! Response normalizer
//!
//! Generative backends do not reliably return valid JSON, nor the nesting
//! they were asked for. Everything here turns whatever text came back into an
//! [`AnalysisResult`], falling back to [`AnalysisResult::fallback`] when the
//! text cannot be decoded at all. Individual malformed fields never abort the
//! whole record.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::analysis::AnalysisResult;
use crate::{Error, Result};

/// Decoded outer structure of a model response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// Provider envelope carrying the analysis as an embedded JSON string
    /// at `candidates[0].content.parts[0].text`
    RawEnvelope(Value),
    /// The analysis object itself
    DirectObject(Map<String, Value>),
}

impl ResponseShape {
    /// Decode `raw`, trying the envelope strategy before the direct one.
    pub fn decode(raw: &str) -> Result<Self> {
        let outer: Value = serde_json::from_str(raw)
            .map_err(|e| Error::MalformedResponse(format!("response is not valid JSON: {}", e)))?;

        match outer {
            Value::Object(map) if map.contains_key("candidates") => {
                Ok(ResponseShape::RawEnvelope(Value::Object(map)))
            }
            Value::Object(map) => Ok(ResponseShape::DirectObject(map)),
            Value::Null => Err(Error::MalformedResponse("response is JSON null".to_string())),
            other => {
                debug!(kind = json_type_name(&other), "response is not an object, no fields to read");
                Ok(ResponseShape::DirectObject(Map::new()))
            }
        }
    }

    /// Resolve to the analysis object, unwrapping the envelope if needed.
    pub fn into_analysis_object(self) -> Result<Map<String, Value>> {
        match self {
            ResponseShape::DirectObject(map) => Ok(map),
            ResponseShape::RawEnvelope(envelope) => {
                let text = envelope
                    .pointer("/candidates/0/content/parts/0/text")
                    .and_then(Value::as_str)
                    .filter(|text| !text.is_empty())
                    .ok_or_else(|| {
                        Error::MalformedResponse(
                            "envelope has no candidates[0].content.parts[0].text".to_string(),
                        )
                    })?;

                match serde_json::from_str::<Value>(text) {
                    Ok(Value::Object(map)) => Ok(map),
                    Ok(Value::Null) => Err(Error::MalformedResponse(
                        "candidate text is JSON null".to_string(),
                    )),
                    Ok(other) => {
                        debug!(kind = json_type_name(&other), "candidate text is not an object");
                        Ok(Map::new())
                    }
                    Err(e) => Err(Error::MalformedResponse(format!(
                        "candidate text is not valid JSON: {}",
                        e
                    ))),
                }
            }
        }
    }
}

/// Normalize a raw response, reporting why decoding failed.
pub fn try_normalize(raw: &str) -> Result<AnalysisResult> {
    let shape = ResponseShape::decode(raw)?;
    if matches!(shape, ResponseShape::RawEnvelope(_)) {
        debug!("unwrapping provider envelope");
    }
    let object = shape.into_analysis_object()?;
    Ok(project(&object))
}

/// Normalize a raw response; never fails.
pub fn normalize(raw: &str) -> AnalysisResult {
    match try_normalize(raw) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "falling back to default analysis");
            AnalysisResult::fallback()
        }
    }
}

/// Normalize a response that was already decoded into a JSON value.
///
/// The value is serialized back to text first, so this behaves exactly like
/// [`normalize`] on the value's JSON form.
pub fn normalize_value(raw: &Value) -> AnalysisResult {
    match raw {
        Value::String(text) => normalize(text),
        other => normalize(&other.to_string()),
    }
}

fn project(object: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult {
        quality: sanitize_string(object.get("quality")),
        recommendations: sanitize_array(object.get("recommendations")),
        improved_code: sanitize_string(object.get("improvedCode")),
        performance: sanitize_array(object.get("performance")),
        security: sanitize_array(object.get("security")),
        best_practices: sanitize_array(object.get("bestPractices")),
        framework_mismatch: matches!(object.get("frameworkMismatch"), Some(Value::Bool(true))),
    }
}

/// Trimmed text of a field; null and missing become empty.
pub(crate) fn sanitize_string(value: Option<&Value>) -> String {
    value.map(plain_text).unwrap_or_default().trim().to_string()
}

/// Plain-text rendering of a JSON value. Lists are joined with commas.
fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(plain_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Non-empty trimmed entries of a list field.
///
/// A bare string counts as a one-element list; any other non-list value is
/// treated as empty.
pub(crate) fn sanitize_array(value: Option<&Value>) -> Vec<String> {
    let items: &[Value] = match value {
        Some(Value::Array(items)) => items.as_slice(),
        Some(single @ Value::String(_)) => std::slice::from_ref(single),
        _ => &[],
    };

    items
        .iter()
        .map(|item| sanitize_string(Some(item)))
        .filter(|item| !item.is_empty())
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
