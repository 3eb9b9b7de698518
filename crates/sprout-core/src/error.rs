use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown answer value: {0}")]
    UnknownAnswer(String),

    #[error("unknown emotion label: {0}")]
    UnknownEmotion(String),
}
