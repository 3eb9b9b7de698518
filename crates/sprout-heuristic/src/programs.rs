//! Program-level therapy referrals, age-banded with emotion-informed extras.

use sprout_core::models::emotion::Emotion;

use crate::Observations;
use crate::bands::AgeBand;

/// Hard cap on the referral list.
pub const MAX_REFERRALS: usize = 6;

fn core_referrals(band: AgeBand) -> &'static [&'static str] {
    match band {
        AgeBand::Toddler => &[
            "Early Intensive Behavioral Intervention (EIBI): 15-25 hours per week of \
             structured ABA therapy with certified BCBA supervision",
            "Speech-Language Pathology: Weekly sessions focusing on functional \
             communication and augmentative communication as needed",
            "Developmental-Individual Differences-Relationship-based (DIR/Floortime): \
             Parent-implemented intervention for emotional and social development",
            "Occupational Therapy: Sensory integration therapy and fine motor skill \
             development for daily living independence",
        ],
        AgeBand::Preschool => &[
            "School-based Special Education Services: Individualized Education Program \
             (IEP) with autism-specific accommodations",
            "Social Skills Group Therapy: Structured weekly sessions with typically \
             developing peers for social communication practice",
            "Behavioral Intervention Support: Positive Behavior Support Plan with \
             functional behavior assessment",
            "Family Training and Support: Parent education programs on autism spectrum \
             management and home-based strategies",
        ],
        AgeBand::SchoolAge => &[
            "Cognitive Behavioral Therapy (CBT): Modified for autism spectrum to address \
             anxiety, depression, and executive functioning",
            "Vocational Rehabilitation Services: Job coaching, workplace accommodations, \
             and career exploration",
            "Independent Living Skills Training: Community-based instruction for \
             transportation, self-care, and social navigation",
            "Transition Planning Services: Coordination between educational, vocational, \
             and adult services",
        ],
    }
}

/// Assemble the referral list: the band's core programs plus any
/// emotion-informed specializations, capped at [`MAX_REFERRALS`].
pub(crate) fn build_referrals(obs: &Observations) -> Vec<String> {
    let mut referrals: Vec<String> = core_referrals(obs.band)
        .iter()
        .map(|r| r.to_string())
        .collect();

    match obs.dominant {
        Some(Emotion::Fear) | Some(Emotion::Sad) => referrals.push(
            "Anxiety Management Therapy: Specialized treatment for autism-related \
             anxiety using evidence-based CBT approaches"
                .to_string(),
        ),
        Some(Emotion::Angry) => referrals.push(
            "Behavioral Crisis Management: Specialized intervention for emotional \
             dysregulation and challenging behaviors"
                .to_string(),
        ),
        Some(Emotion::Happy) if obs.social_concern || obs.speech_concern => referrals.push(
            "Strength-based Intervention: Capitalize on positive emotional state to \
             enhance social and communication skills"
                .to_string(),
        ),
        _ => {}
    }

    referrals.truncate(MAX_REFERRALS);
    referrals
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::models::screening::ScreeningInput;

    fn obs_with_emotion(age: &str, emotion: Option<&str>) -> Observations {
        let mut body = serde_json::json!({
            "age": age,
            "eye_contact": "Good",
            "speech_level": "Limited",
            "social_response": "Passive",
            "sensory_reactions": "Neutral",
        });
        if let Some(label) = emotion {
            body["emotion_data"] = serde_json::json!({
                "dominant_emotion": label,
                "confidence": 55.0,
                "all_emotions": { label: 55.0, "neutral": 45.0 },
                "method": "simulated",
                "timestamp": "2026-01-15T10:00:00Z",
            });
        }
        let input: ScreeningInput = serde_json::from_value(body).unwrap();
        Observations::from_input(&input)
    }

    #[test]
    fn toddlers_get_early_intervention_programs() {
        let referrals = build_referrals(&obs_with_emotion("2", None));
        assert_eq!(referrals.len(), 4);
        assert!(referrals[0].contains("EIBI"));
    }

    #[test]
    fn fearful_presentation_adds_anxiety_referral() {
        let referrals = build_referrals(&obs_with_emotion("7", Some("fear")));
        assert!(referrals.iter().any(|r| r.contains("Anxiety Management")));
    }

    #[test]
    fn happy_with_communication_concern_adds_strength_referral() {
        let referrals = build_referrals(&obs_with_emotion("4", Some("happy")));
        assert!(referrals.iter().any(|r| r.contains("Strength-based")));
        assert!(referrals.len() <= MAX_REFERRALS);
    }
}
