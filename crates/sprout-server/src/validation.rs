//! Required-field validation for `/analyze`.
//!
//! Runs before any typed deserialization so the 400 body can enumerate
//! exactly which fields are missing, with an example payload. Presence and
//! non-blankness are the whole contract; answer values themselves are not
//! range-checked here.

use serde::Serialize;
use serde_json::{Value, json};

use sprout_core::models::screening::REQUIRED_FIELDS;

/// Structured 400 response body.
#[derive(Debug, Serialize)]
pub struct ValidationRejection {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    pub required_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl ValidationRejection {
    fn not_an_object() -> Self {
        Self {
            error: "Invalid request body".to_string(),
            message: "Request body is required and must be a valid JSON object".to_string(),
            missing_fields: None,
            required_fields: required_fields(),
            example: None,
        }
    }

    fn missing(fields: Vec<String>) -> Self {
        Self {
            error: "Missing required fields".to_string(),
            message: format!("The following fields are required: {}", fields.join(", ")),
            missing_fields: Some(fields),
            required_fields: required_fields(),
            example: Some(example_payload()),
        }
    }

    /// The body was an object with all fields present, but could not be
    /// deserialized (e.g. a malformed `emotion_data`).
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self {
            error: "Invalid request body".to_string(),
            message: detail.to_string(),
            missing_fields: None,
            required_fields: required_fields(),
            example: Some(example_payload()),
        }
    }
}

fn required_fields() -> Vec<String> {
    REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect()
}

/// The example payload echoed in 400 responses.
pub fn example_payload() -> Value {
    json!({
        "age": "2",
        "eye_contact": "Moderate",
        "speech_level": "Limited",
        "social_response": "Active",
        "sensory_reactions": "Sensitive",
    })
}

/// Verify the body is an object carrying all five required fields, each
/// present, non-null, and non-blank. `missing_fields` preserves
/// [`REQUIRED_FIELDS`] order.
pub fn check_required(body: &Value) -> Result<(), ValidationRejection> {
    let Some(map) = body.as_object() else {
        return Err(ValidationRejection::not_an_object());
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| is_blank(map.get(**field)))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationRejection::missing(missing))
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
