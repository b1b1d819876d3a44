//! Two-stage decoding of backend responses.
//!
//! Both endpoints answer `{"result": "<json text>"}`: the payload is a JSON
//! document encoded as a string inside a JSON envelope. [`parse_envelope`]
//! unwraps the outer layer, [`parse_result`] / [`parse_ideas`] decode the inner one.

use serde::{Deserialize, Deserializer};

use super::GenerateError;
use crate::models::{FeatureResult, Idea};

#[derive(Debug, Deserialize)]
struct Envelope {
    /// `None` only when the key is absent; `"result": null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    result: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Extract the inner JSON text from a response body.
pub fn parse_envelope(body: &str) -> Result<String, GenerateError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedResponse(format!("invalid envelope: {}", e)))?;

    match envelope.result {
        Some(serde_json::Value::String(inner)) => Ok(inner),
        Some(other) => Err(GenerateError::MalformedResponse(format!(
            "expected `result` to be a string, got {}",
            json_kind(&other)
        ))),
        None => Err(GenerateError::MalformedResponse(
            "missing `result` field".to_string(),
        )),
    }
}

/// Decode the inner text of a generation response.
pub fn parse_result(inner: &str) -> Result<FeatureResult, GenerateError> {
    serde_json::from_str(inner)
        .map_err(|e| GenerateError::MalformedResponse(format!("invalid feature result: {}", e)))
}

/// Decode the inner text of an ideas response.
pub fn parse_ideas(inner: &str) -> Result<Vec<Idea>, GenerateError> {
    serde_json::from_str(inner)
        .map_err(|e| GenerateError::MalformedResponse(format!("invalid idea list: {}", e)))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_yields_inner_text() {
        let inner = parse_envelope(r#"{"result": "{\"a\": 1}"}"#).unwrap();
        assert_eq!(inner, r#"{"a": 1}"#);
    }

    #[test]
    fn envelope_that_is_not_json_is_malformed() {
        let err = parse_envelope("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }

    #[test]
    fn envelope_without_result_is_malformed() {
        let err = parse_envelope(r#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(ref m) if m.contains("missing")));
    }

    #[test]
    fn null_result_is_malformed() {
        let err = parse_envelope(r#"{"result": null}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid response format: expected `result` to be a string, got null"
        );
    }

    #[test]
    fn object_result_is_malformed() {
        let err = parse_envelope(r#"{"result": {"epic_title": "x"}}"#).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(ref m) if m.contains("object")));
    }

    #[test]
    fn inner_result_decodes() {
        let result = parse_result(
            r#"{"epic_title":"Login","description":"d","rationale":"r","long_description":"l","stories":[]}"#,
        )
        .unwrap();
        assert_eq!(result.epic_title, "Login");
        assert!(result.stories.is_empty());
    }

    #[test]
    fn inner_result_that_is_not_json_is_malformed() {
        let err = parse_result("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }

    #[test]
    fn ideas_keep_server_order() {
        let ideas = parse_ideas(
            r#"[{"short_title":"B","long_description":"bee"},{"short_title":"A","long_description":"ay"}]"#,
        )
        .unwrap();
        let titles: Vec<_> = ideas.iter().map(|i| i.short_title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn ideas_object_is_malformed() {
        let err = parse_ideas(r#"{"short_title":"A"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }
}
