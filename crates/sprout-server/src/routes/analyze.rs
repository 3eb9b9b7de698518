use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::warn;

use sprout_core::models::recommendation::has_required_shape;
use sprout_core::models::screening::ScreeningInput;
use sprout_gemini::client::ModelOutput;
use sprout_gemini::prompt::build_prompt;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, ValidationRejection};

/// `POST /analyze`: validate, build the prompt, ask the model (or not),
/// and always return a plan with the request echoed under `_input`.
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    validation::check_required(&body).map_err(ApiError::Validation)?;

    let input: ScreeningInput = serde_json::from_value(body.clone())
        .map_err(|e| ApiError::Validation(ValidationRejection::malformed(e)))?;

    let prompt = build_prompt(&input);
    let mut plan = generate_plan(&state, &input, &prompt).await?;

    // Echo the request so the client can render what was analyzed.
    plan["_input"] = body;

    Ok(Json(plan))
}

/// Use the model's output only when it carries the required plan shape;
/// every other outcome is absorbed and replaced by the heuristic plan.
async fn generate_plan(
    state: &AppState,
    input: &ScreeningInput,
    prompt: &str,
) -> Result<Value, ApiError> {
    if let Some(client) = &state.gemini {
        match client.generate(prompt).await {
            Ok(ModelOutput::Structured(plan)) if has_required_shape(&plan) => {
                return Ok(plan);
            }
            Ok(ModelOutput::Structured(_)) => {
                warn!("model response missing required plan keys, using heuristic plan");
            }
            Ok(ModelOutput::Unstructured(text)) => {
                warn!(
                    text_len = text.len(),
                    "model returned unstructured text, using heuristic plan"
                );
            }
            Err(e) => {
                warn!(error = %e, "model call failed, using heuristic plan");
            }
        }
    }

    Ok(serde_json::to_value(sprout_heuristic::recommend(input))?)
}
