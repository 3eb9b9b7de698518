//! Recommendation plans returned by `/analyze`.

use serde::{Deserialize, Serialize};

/// Keys every `/analyze` response must carry as arrays of strings.
pub const REQUIRED_PLAN_KEYS: [&str; 3] = ["focus_areas", "therapy_goals", "activities"];

/// An intervention plan, produced once per request by either the external
/// model or the heuristic fallback. Has no identity or lifecycle beyond the
/// single response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationPlan {
    pub focus_areas: Vec<String>,
    pub therapy_goals: Vec<String>,
    pub activities: Vec<String>,
    pub therapy_recommendations: Vec<String>,
    pub clinical_notes: String,
}

/// Whether a model response carries the required plan shape: all of
/// [`REQUIRED_PLAN_KEYS`] present as arrays of strings.
///
/// This is the guard that keeps `{raw: ...}` and other malformed model
/// output from reaching the client; the caller substitutes the heuristic
/// plan when it fails.
pub fn has_required_shape(value: &serde_json::Value) -> bool {
    REQUIRED_PLAN_KEYS.iter().all(|key| {
        value
            .get(key)
            .and_then(|v| v.as_array())
            .is_some_and(|items| items.iter().all(|item| item.is_string()))
    })
}
