//! Core traits for the aria bridge

use crate::error::Result;
use crate::types::TagSnapshot;
use std::path::Path;

/// Platform tag-reading facility.
///
/// One implementation exists per host platform facility (lofty, symphonia);
/// the resolver's rank-merge algorithm is written once against this trait.
/// `open` acquires whatever handle the facility needs, reads the available
/// tag blocks, and releases the handle before returning; drop semantics
/// guarantee release on every exit path.
pub trait MetadataSource: Send + Sync {
    /// Read all tag blocks and the reported duration from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its container
    /// cannot be parsed. Callers degrade this to an all-absent record.
    fn open(&self, path: &Path) -> Result<TagSnapshot>;
}

/// The application surface that receives forwarded playback intents.
///
/// Delivery is best effort: the router drops the intent when no surface is
/// attached, and implementations must not block the caller.
pub trait PlaybackSink: Send + Sync {
    /// Deliver one playback request for the given item identifier.
    fn play(&self, item_id: &str);
}
