//! Prompt construction from screening answers.

use sprout_core::models::screening::ScreeningInput;

/// Render a screening input as the natural-language prompt sent to the
/// model.
///
/// Pure string interpolation; values are user-entered and pass through
/// unescaped. The closing instruction pins the JSON keys the response
/// assembler expects.
pub fn build_prompt(input: &ScreeningInput) -> String {
    let mut prompt = format!(
        "Child age: {}\nEye contact: {}\nSpeech level: {}\nSocial response: {}\nSensory reactions: {}\n",
        input.age,
        input.eye_contact,
        input.speech_level,
        input.social_response,
        input.sensory_reactions,
    );

    if let Some(emotion) = &input.emotion_data {
        let profile: Vec<String> = emotion
            .all_emotions
            .iter()
            .map(|(label, weight)| format!("{label}: {weight}%"))
            .collect();
        prompt.push_str(&format!(
            "\nEmotion Analysis: Primary emotion detected is {} with {}% confidence. \
             All emotions detected: {}.\n",
            emotion.dominant_emotion,
            emotion.confidence,
            profile.join(", "),
        ));
    }

    let with_emotion = input.emotion_data.is_some();
    prompt.push_str(&format!(
        "\nBased on this child's responses{}, give 3 short therapy goals and 2 \
         activities that can help improvement. {}Return JSON with keys: \
         focus_areas (list of strings), therapy_goals (list of 3 strings), \
         activities (list of 2 strings).",
        if with_emotion { " and emotional state" } else { "" },
        if with_emotion {
            "Consider the detected emotions when providing recommendations. "
        } else {
            ""
        },
    ));

    prompt
}
