//! Randomized emotion synthesis.
//!
//! This is a stub detector, not a detection algorithm: it fabricates a
//! plausible-looking distribution from a per-emotion base/variance table,
//! weighted toward positive emotions. Samples it produces are tagged
//! `method: "simulated"` so downstream consumers can tell them apart from
//! measured data.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sprout_core::models::emotion::{Emotion, EmotionSample};

use crate::EmotionSource;
use crate::error::EmotionError;

/// Extra base weight granted to the chosen dominant emotion.
const DOMINANT_BOOST: f64 = 20.0;

/// Probability mass steered toward the positive label set.
const POSITIVE_BIAS: f64 = 0.7;

const POSITIVE: [Emotion; 3] = [Emotion::Happy, Emotion::Neutral, Emotion::Surprise];

/// (base, variance) per emotion, in [`Emotion::ALL`] order.
const PATTERNS: [(Emotion, f64, f64); 7] = [
    (Emotion::Happy, 45.0, 25.0),
    (Emotion::Sad, 15.0, 15.0),
    (Emotion::Angry, 10.0, 10.0),
    (Emotion::Fear, 8.0, 8.0),
    (Emotion::Surprise, 12.0, 10.0),
    (Emotion::Disgust, 5.0, 5.0),
    (Emotion::Neutral, 25.0, 20.0),
];

/// A random [`EmotionSource`] that never fails.
pub struct SimulatedDetector {
    rng: StdRng,
}

impl SimulatedDetector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible captures.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick_dominant(&mut self) -> Emotion {
        if self.rng.r#gen::<f64>() < POSITIVE_BIAS {
            POSITIVE[self.rng.gen_range(0..POSITIVE.len())]
        } else {
            Emotion::ALL[self.rng.gen_range(0..Emotion::ALL.len())]
        }
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionSource for SimulatedDetector {
    fn method(&self) -> &'static str {
        "simulated"
    }

    fn capture(&mut self) -> Result<EmotionSample, EmotionError> {
        let dominant = self.pick_dominant();

        let mut weights = BTreeMap::new();
        for (emotion, base, variance) in PATTERNS {
            let boost = if emotion == dominant {
                DOMINANT_BOOST
            } else {
                0.0
            };
            let weight = base + boost + self.rng.r#gen::<f64>() * variance;
            weights.insert(emotion, weight);
        }

        // Normalize to percentages summing to ~100, rounded to 2 decimals.
        let total: f64 = weights.values().sum();
        for weight in weights.values_mut() {
            *weight = (*weight / total * 100.0 * 100.0).round() / 100.0;
        }

        let confidence = weights.get(&dominant).copied().unwrap_or(0.0);

        Ok(EmotionSample {
            dominant_emotion: dominant,
            confidence,
            all_emotions: weights,
            method: self.method().to_string(),
            timestamp: jiff::Timestamp::now(),
        })
    }
}
