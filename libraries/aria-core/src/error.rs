//! Core error types for the aria bridge

use thiserror::Error;

/// Result type alias using `AriaError`
pub type Result<T> = std::result::Result<T, AriaError>;

/// Core error type for the aria bridge
#[derive(Error, Debug)]
pub enum AriaError {
    /// Metadata reading/parsing errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Invalid input from a caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Channel/dispatch errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl AriaError {
    /// Create a metadata error
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a channel error
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }
}
