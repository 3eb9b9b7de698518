//! sprout-emotion
//!
//! Producers of [`EmotionSample`] values behind a common trait. A genuine
//! camera- or service-backed detector would implement [`EmotionSource`];
//! the implementation shipped here is an explicitly simulated one, so the
//! interface boundary is honest about what is simulated versus measured.
//!
//! [`EmotionSample`]: sprout_core::models::emotion::EmotionSample

pub mod error;
pub mod simulated;

use sprout_core::models::emotion::EmotionSample;

use crate::error::EmotionError;

/// Anything that can produce one emotion distribution per capture.
pub trait EmotionSource {
    /// A short tag identifying the producer; recorded in
    /// `EmotionSample::method`.
    fn method(&self) -> &'static str;

    /// Produce one sample. Real detectors may fail (no camera, upstream
    /// outage); the simulated source never does.
    fn capture(&mut self) -> Result<EmotionSample, EmotionError>;
}
