//! Intent routing errors

use thiserror::Error;

/// Caller errors on the direct playback call.
///
/// Routing misses (wrong URL shape, unmatched activity type) are not
/// errors; they surface as a "not handled" boolean instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntentError {
    /// The direct call omitted or blanked the required item identifier
    #[error("itemId is required")]
    InvalidArgument,
}

impl IntentError {
    /// Stable error code surfaced over the channel
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}
