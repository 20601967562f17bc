//! Resolution fault taxonomy
//!
//! Faults stay internal to this crate: the public `resolve` contract
//! converts every fault into an all-absent record. The distinction is kept
//! for unit tests and debug logging.
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ResolutionFault`
pub type Result<T> = std::result::Result<T, ResolutionFault>;

/// Why a resolution attempt could not produce tag data
#[derive(Error, Debug)]
pub enum ResolutionFault {
    /// File does not exist or is not a regular file
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The supplied path/URL cannot name a local file
    #[error("not a local file path: {0}")]
    NotLocal(String),

    /// The container could not be opened or parsed
    #[error("unreadable container: {0}")]
    Container(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Tag parsing error from the lofty facility
    #[cfg(feature = "lofty")]
    #[error(transparent)]
    Tag(#[from] lofty::error::LoftyError),
}

impl From<ResolutionFault> for aria_core::AriaError {
    fn from(err: ResolutionFault) -> Self {
        aria_core::AriaError::metadata(err.to_string())
    }
}
