use std::collections::BTreeMap;

use sprout_core::models::emotion::{Emotion, EmotionSample};
use sprout_core::models::screening::ScreeningInput;
use sprout_gemini::prompt::build_prompt;

fn base_input() -> ScreeningInput {
    serde_json::from_value(serde_json::json!({
        "age": "2",
        "eye_contact": "Poor",
        "speech_level": "Limited",
        "social_response": "Passive",
        "sensory_reactions": "Sensitive",
    }))
    .unwrap()
}

#[test]
fn every_field_appears_in_the_prompt() {
    let prompt = build_prompt(&base_input());
    assert!(prompt.contains("Child age: 2"));
    assert!(prompt.contains("Eye contact: Poor"));
    assert!(prompt.contains("Speech level: Limited"));
    assert!(prompt.contains("Social response: Passive"));
    assert!(prompt.contains("Sensory reactions: Sensitive"));
    assert!(prompt.contains("Return JSON with keys: focus_areas"));
}

#[test]
fn emotion_free_prompt_has_no_emotion_block() {
    let prompt = build_prompt(&base_input());
    assert!(!prompt.contains("Emotion Analysis"));
    assert!(!prompt.contains("emotional state"));
}

#[test]
fn emotion_block_lists_dominant_and_profile() {
    let mut input = base_input();
    let mut all_emotions = BTreeMap::new();
    all_emotions.insert(Emotion::Happy, 62.5);
    all_emotions.insert(Emotion::Sad, 12.5);
    all_emotions.insert(Emotion::Neutral, 25.0);
    input.emotion_data = Some(EmotionSample {
        dominant_emotion: Emotion::Happy,
        confidence: 62.5,
        all_emotions,
        method: "simulated".to_string(),
        timestamp: "2026-01-15T10:00:00Z".parse().unwrap(),
    });

    let prompt = build_prompt(&input);
    assert!(prompt.contains("Primary emotion detected is happy with 62.5% confidence"));
    assert!(prompt.contains("happy: 62.5%"));
    assert!(prompt.contains("sad: 12.5%"));
    assert!(prompt.contains("and emotional state"));
    assert!(prompt.contains("Consider the detected emotions"));
}
