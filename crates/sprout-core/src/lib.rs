//! sprout-core
//!
//! Pure domain types for the screening pipeline: screening answers, emotion
//! samples, and recommendation plans. No HTTP or model-vendor dependency —
//! this is the shared vocabulary of the Sprout system.

pub mod error;
pub mod models;
