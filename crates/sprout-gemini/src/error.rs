use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to generative language API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generative language API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response contained no candidate text")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
