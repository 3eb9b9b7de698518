//! Emotion distributions attached to a screening submission.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The fixed emotion label set.
///
/// `Ord` follows declaration order, so `BTreeMap<Emotion, _>` iterates
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| s.eq_ignore_ascii_case(e.as_str()))
            .ok_or_else(|| CoreError::UnknownEmotion(s.to_string()))
    }
}

/// A distribution over the emotion label set with one designated dominant
/// label.
///
/// Produced client-side by an emotion source (real or simulated) and
/// consumed only as opaque input to prompt construction. Weights are
/// percentages and sum to roughly 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionSample {
    pub dominant_emotion: Emotion,
    /// The dominant emotion's share, in `[0, 100]`.
    pub confidence: f64,
    pub all_emotions: BTreeMap<Emotion, f64>,
    /// Tag identifying the producer, e.g. `"simulated"`.
    pub method: String,
    pub timestamp: jiff::Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Emotion::Surprise).unwrap(),
            "\"surprise\""
        );
        assert_eq!("FEAR".parse::<Emotion>().unwrap(), Emotion::Fear);
    }

    #[test]
    fn sample_round_trips_with_string_keys() {
        let mut all_emotions = BTreeMap::new();
        all_emotions.insert(Emotion::Happy, 60.0);
        all_emotions.insert(Emotion::Neutral, 40.0);

        let sample = EmotionSample {
            dominant_emotion: Emotion::Happy,
            confidence: 60.0,
            all_emotions,
            method: "simulated".to_string(),
            timestamp: "2026-01-15T10:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["all_emotions"]["happy"], 60.0);
        assert_eq!(json["dominant_emotion"], "happy");

        let back: EmotionSample = serde_json::from_value(json).unwrap();
        assert_eq!(back.dominant_emotion, Emotion::Happy);
    }
}
