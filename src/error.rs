use thiserror::Error;

pub type Result<T> = std::result::Result<T, DragboardError>;

#[derive(Debug, Error)]
pub enum DragboardError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Board session is no longer running")]
    SessionClosed,
}
