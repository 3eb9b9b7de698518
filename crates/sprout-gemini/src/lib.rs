//! sprout-gemini
//!
//! Prompt construction and the single-attempt caller for the generative
//! language API. The caller is deliberately thin: one request, first
//! candidate's text, parsed as JSON if possible. Everything else — retries,
//! shape enforcement, substitution — is the fallback layer's job.

pub mod client;
pub mod error;
pub mod prompt;
