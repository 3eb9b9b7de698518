use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmotionError {
    #[error("emotion source unavailable: {0}")]
    Unavailable(String),
}
