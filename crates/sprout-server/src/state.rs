use std::sync::Arc;

use sprout_gemini::client::GeminiClient;

/// Shared application state, injected into route handlers via Axum state.
///
/// `gemini` is `None` when no API key was configured at startup; the
/// analyze handler then uses the heuristic fallback unconditionally.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Option<Arc<GeminiClient>>,
    pub port: u16,
}
