use sprout_core::models::screening::ScreeningInput;
use sprout_heuristic::activities::MAX_ACTIVITIES;
use sprout_heuristic::goals::MAX_GOALS;
use sprout_heuristic::recommend;

fn screening(body: serde_json::Value) -> ScreeningInput {
    serde_json::from_value(body).unwrap()
}

fn concerning_toddler() -> ScreeningInput {
    screening(serde_json::json!({
        "age": "2",
        "eye_contact": "Poor",
        "speech_level": "Limited",
        "social_response": "Passive",
        "sensory_reactions": "Sensitive",
    }))
}

#[test]
fn concerning_toddler_scenario() {
    let plan = recommend(&concerning_toddler());

    assert!(
        plan.focus_areas.iter().any(|f| f.contains("Eye Contact")),
        "expected an eye contact focus area, got {:?}",
        plan.focus_areas
    );
    assert!(
        plan.focus_areas.iter().any(|f| f.contains("Communication")),
        "expected a communication focus area, got {:?}",
        plan.focus_areas
    );
    assert!(plan.therapy_goals.len() >= 4);
    assert!(plan.activities.len() >= 4);
    assert!(!plan.clinical_notes.is_empty());
    assert!(!plan.therapy_recommendations.is_empty());

    // Age 2 falls in the under-3 bucket.
    let eye_goal = plan
        .therapy_goals
        .iter()
        .find(|g| g.contains("eye contact"))
        .expect("eye contact goal");
    assert!(eye_goal.contains("2-3"));
}

#[test]
fn output_is_deterministic() {
    let input = concerning_toddler();
    let first = recommend(&input);
    let second = recommend(&input);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn focus_areas_never_duplicate_and_caps_hold() {
    let plan = recommend(&concerning_toddler());

    let mut seen = plan.focus_areas.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), plan.focus_areas.len());

    assert!(plan.therapy_goals.len() <= MAX_GOALS);
    assert!(plan.activities.len() <= MAX_ACTIVITIES);

    let mut goals = plan.therapy_goals.clone();
    goals.sort();
    goals.dedup();
    assert_eq!(goals.len(), plan.therapy_goals.len());
}

#[test]
fn unremarkable_input_gets_default_focus_and_padded_goals() {
    let plan = recommend(&screening(serde_json::json!({
        "age": "5",
        "eye_contact": "Good",
        "speech_level": "Fluent",
        "social_response": "Engaged",
        "sensory_reactions": "Resilient",
    })));

    assert_eq!(
        plan.focus_areas,
        vec![
            "Comprehensive Developmental Assessment",
            "Family-Centered Early Intervention",
        ]
    );
    assert_eq!(plan.therapy_goals.len(), MAX_GOALS);
    assert!(!plan.activities.is_empty());
}

#[test]
fn emotion_sample_shifts_the_plan() {
    let plan = recommend(&screening(serde_json::json!({
        "age": "4",
        "eye_contact": "Good",
        "speech_level": "Fluent",
        "social_response": "Engaged",
        "sensory_reactions": "Neutral",
        "emotion_data": {
            "dominant_emotion": "angry",
            "confidence": 61.5,
            "all_emotions": { "angry": 61.5, "neutral": 38.5 },
            "method": "simulated",
            "timestamp": "2026-02-01T08:30:00Z",
        },
    })));

    assert!(
        plan.focus_areas
            .iter()
            .any(|f| f.contains("Behavioral Management"))
    );
    assert!(plan.clinical_notes.contains("angry"));
    assert!(
        plan.therapy_recommendations
            .iter()
            .any(|r| r.contains("Crisis Management"))
    );
}

#[test]
fn cross_field_trigger_words_do_not_fire_other_rules() {
    // "Poor" appears only in the social answer; the eye contact rule must
    // stay quiet.
    let plan = recommend(&screening(serde_json::json!({
        "age": "4",
        "eye_contact": "Good",
        "speech_level": "Fluent",
        "social_response": "Poor",
        "sensory_reactions": "Resilient",
    })));

    assert!(!plan.focus_areas.iter().any(|f| f.contains("Eye Contact")));
    assert!(plan.focus_areas.iter().any(|f| f.contains("Peer Engagement")));
}
