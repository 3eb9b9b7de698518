//! Screening form answers.
//!
//! The `/analyze` contract is deliberately lenient: the service validates
//! presence and non-blankness only, and echoes the request back under
//! `_input`. The five answers are therefore carried as strings; the
//! canonical vocabularies below are what the client form offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::models::emotion::EmotionSample;

/// The five required screening fields, in canonical order.
///
/// Validation reports `missing_fields` in this order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "age",
    "eye_contact",
    "speech_level",
    "social_response",
    "sensory_reactions",
];

/// One submitted screening form.
///
/// Immutable once sent; the service never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningInput {
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(deserialize_with = "string_or_number")]
    pub eye_contact: String,
    #[serde(deserialize_with = "string_or_number")]
    pub speech_level: String,
    #[serde(deserialize_with = "string_or_number")]
    pub social_response: String,
    #[serde(deserialize_with = "string_or_number")]
    pub sensory_reactions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_data: Option<EmotionSample>,
}

impl ScreeningInput {
    /// Build an input from typed form answers, as the client form does.
    pub fn from_answers(
        age: u32,
        eye_contact: EyeContact,
        speech_level: SpeechLevel,
        social_response: SocialResponse,
        sensory_reactions: SensoryReaction,
    ) -> Self {
        Self {
            age: age.to_string(),
            eye_contact: eye_contact.to_string(),
            speech_level: speech_level.to_string(),
            social_response: social_response.to_string(),
            sensory_reactions: sensory_reactions.to_string(),
            emotion_data: None,
        }
    }

    /// Parse the leading integer out of the age answer, if any.
    pub fn age_years(&self) -> Option<u32> {
        let digits: String = self
            .age
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

/// Accept either a JSON string or a JSON number for an answer field.
///
/// The form submits strings, but hand-built clients send `age` as a number;
/// numbers are stringified rather than rejected.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

macro_rules! answer_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant,)+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let label = match self {
                    $($name::$variant => $label,)+
                };
                f.write_str(label)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok($name::$variant);
                    }
                )+
                Err(CoreError::UnknownAnswer(s.to_string()))
            }
        }
    };
}

answer_enum! {
    /// Canonical eye contact answers.
    EyeContact {
        Poor => "Poor",
        Moderate => "Moderate",
        Good => "Good",
    }
}

answer_enum! {
    /// Canonical speech level answers.
    SpeechLevel {
        Limited => "Limited",
        Moderate => "Moderate",
        Fluent => "Fluent",
    }
}

answer_enum! {
    /// Canonical social response answers.
    SocialResponse {
        Passive => "Passive",
        Active => "Active",
        Engaged => "Engaged",
    }
}

answer_enum! {
    /// Canonical sensory reaction answers.
    SensoryReaction {
        Sensitive => "Sensitive",
        Neutral => "Neutral",
        Resilient => "Resilient",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_age_is_stringified() {
        let input: ScreeningInput = serde_json::from_value(serde_json::json!({
            "age": 2,
            "eye_contact": "Poor",
            "speech_level": "Limited",
            "social_response": "Passive",
            "sensory_reactions": "Sensitive",
        }))
        .unwrap();
        assert_eq!(input.age, "2");
        assert_eq!(input.age_years(), Some(2));
    }

    #[test]
    fn age_years_tolerates_suffixes_and_garbage() {
        let mut input: ScreeningInput = serde_json::from_value(serde_json::json!({
            "age": "4 years",
            "eye_contact": "Good",
            "speech_level": "Fluent",
            "social_response": "Engaged",
            "sensory_reactions": "Neutral",
        }))
        .unwrap();
        assert_eq!(input.age_years(), Some(4));

        input.age = "unknown".to_string();
        assert_eq!(input.age_years(), None);
    }

    #[test]
    fn answer_vocabulary_parses_case_insensitively() {
        assert_eq!("poor".parse::<EyeContact>().unwrap(), EyeContact::Poor);
        assert_eq!(
            "LIMITED".parse::<SpeechLevel>().unwrap(),
            SpeechLevel::Limited
        );
        assert!("shy".parse::<SocialResponse>().is_err());
    }

    #[test]
    fn from_answers_renders_canonical_labels() {
        let input = ScreeningInput::from_answers(
            3,
            EyeContact::Moderate,
            SpeechLevel::Moderate,
            SocialResponse::Active,
            SensoryReaction::Resilient,
        );
        assert_eq!(input.eye_contact, "Moderate");
        assert_eq!(input.sensory_reactions, "Resilient");
        assert!(input.emotion_data.is_none());
    }
}
