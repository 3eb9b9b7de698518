//! sprout-heuristic
//!
//! Deterministic fallback plan generation. Pure data and rule tables — no
//! network dependency. When the generative model is unconfigured, fails, or
//! returns something unusable, this crate guarantees a structurally valid
//! [`RecommendationPlan`] for any validated screening input.
//!
//! Matching runs over the structured answers, not over rendered prompt
//! text: each rule inspects only its own field, so a value that happens to
//! contain another field's trigger word cannot cross-fire.

pub mod activities;
pub mod bands;
pub mod goals;
pub mod programs;

mod observe;

use sprout_core::models::recommendation::RecommendationPlan;
use sprout_core::models::screening::ScreeningInput;

pub(crate) use observe::Observations;

/// Focus areas used when no rule matched at all.
const DEFAULT_FOCUS_AREAS: [&str; 2] = [
    "Comprehensive Developmental Assessment",
    "Family-Centered Early Intervention",
];

/// Build a complete intervention plan from screening answers.
///
/// Deterministic: identical input always yields identical output. Focus
/// areas are deduplicated, goals are capped at [`goals::MAX_GOALS`], and
/// activities at [`activities::MAX_ACTIVITIES`].
pub fn recommend(input: &ScreeningInput) -> RecommendationPlan {
    let obs = Observations::from_input(input);

    let (mut focus_areas, therapy_goals) = goals::build_goals(&obs);
    let activities = activities::build_activities(&obs);
    let therapy_recommendations = programs::build_referrals(&obs);
    let clinical_notes = clinical_notes(&obs, &focus_areas);

    if focus_areas.is_empty() {
        focus_areas = DEFAULT_FOCUS_AREAS.map(String::from).to_vec();
    }

    RecommendationPlan {
        focus_areas,
        therapy_goals,
        activities,
        therapy_recommendations,
        clinical_notes,
    }
}

/// One-sentence summary embedding age, dominant emotion, and matched focus
/// areas, followed by the standing monitoring guidance.
fn clinical_notes(obs: &Observations, focus_areas: &[String]) -> String {
    let mut notes = format!(
        "Clinical Assessment: {}-year-old child presents with developmental \
         screening concerns requiring evidence-based intervention. ",
        obs.age
    );
    if let Some(emotion) = obs.dominant {
        notes.push_str(&format!("Primary emotional presentation: {emotion}. "));
    }
    if !focus_areas.is_empty() {
        notes.push_str(&format!(
            "Primary focus areas identified: {}. ",
            focus_areas.join(", ")
        ));
    }
    notes.push_str(
        "Recommend multidisciplinary team approach with regular progress \
         monitoring every 4-6 weeks using standardized assessment tools. \
         Family education and environmental modifications essential for \
         optimal outcomes.",
    );
    notes
}
