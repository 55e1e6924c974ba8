//! Error types for the karaoke gateway

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the karaoke gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Upstream text-generation error
    #[error("text generation error: {0}")]
    TextGeneration(String),

    /// Upstream speech-synthesis error
    #[error("speech synthesis error: {0}")]
    Synthesis(String),

    /// Voice listing error
    #[error("voice listing error: {0}")]
    Voices(String),

    /// Word timing data violates the speech-service contract
    #[error("timestamp data invalid: {0}")]
    Timestamps(String),

    /// Audio persistence error
    #[error("audio storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
