//! Derivation of rule-table flags from screening answers.

use sprout_core::models::emotion::Emotion;
use sprout_core::models::screening::ScreeningInput;

use crate::bands::AgeBand;

/// Age assumed when the answer carries no parseable integer.
const DEFAULT_AGE: u32 = 3;

/// Lower-cased trigger flags derived from one screening input.
///
/// Each flag inspects a single answer field; the trigger vocabulary is the
/// same set of substrings the screening form's answer choices produce.
#[derive(Debug, Clone)]
pub(crate) struct Observations {
    pub age: u32,
    pub band: AgeBand,
    pub dominant: Option<Emotion>,
    pub eye_contact_concern: bool,
    pub speech_concern: bool,
    pub sensory_concern: bool,
    pub social_concern: bool,
}

impl Observations {
    pub fn from_input(input: &ScreeningInput) -> Self {
        let age = input.age_years().unwrap_or(DEFAULT_AGE);
        Self {
            age,
            band: AgeBand::from_years(age),
            dominant: input.emotion_data.as_ref().map(|e| e.dominant_emotion),
            eye_contact_concern: answer_has(&input.eye_contact, &["poor", "no", "limited"]),
            speech_concern: answer_has(&input.speech_level, &["no", "limited", "delayed"]),
            sensory_concern: answer_has(&input.sensory_reactions, &["sensitive", "over", "under"]),
            social_concern: answer_has(&input.social_response, &["poor", "limited", "passive"]),
        }
    }

    /// Dominant emotion suggests distress (sad, fearful, or angry).
    pub fn distress(&self) -> bool {
        matches!(
            self.dominant,
            Some(Emotion::Sad) | Some(Emotion::Fear) | Some(Emotion::Angry)
        )
    }

    pub fn anger(&self) -> bool {
        self.dominant == Some(Emotion::Angry)
    }
}

fn answer_has(answer: &str, triggers: &[&str]) -> bool {
    let low = answer.to_lowercase();
    triggers.iter().any(|t| low.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(eye: &str, speech: &str, social: &str, sensory: &str) -> ScreeningInput {
        serde_json::from_value(serde_json::json!({
            "age": "2",
            "eye_contact": eye,
            "speech_level": speech,
            "social_response": social,
            "sensory_reactions": sensory,
        }))
        .unwrap()
    }

    #[test]
    fn flags_fire_per_field_only() {
        // "Poor" in the social answer must not trip the eye contact flag.
        let obs = Observations::from_input(&input("Good", "Fluent", "Poor", "Neutral"));
        assert!(!obs.eye_contact_concern);
        assert!(obs.social_concern);
    }

    #[test]
    fn unparsable_age_defaults_to_three() {
        let mut raw = input("Poor", "Limited", "Passive", "Sensitive");
        raw.age = "toddler".to_string();
        let obs = Observations::from_input(&raw);
        assert_eq!(obs.age, DEFAULT_AGE);
        assert_eq!(obs.band, AgeBand::Preschool);
    }

    #[test]
    fn triggers_match_case_insensitively() {
        let obs = Observations::from_input(&input("POOR", "Delayed speech", "Engaged", "neutral"));
        assert!(obs.eye_contact_concern);
        assert!(obs.speech_concern);
        assert!(!obs.social_concern);
        assert!(!obs.sensory_concern);
    }
}
