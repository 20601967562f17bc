//! Resolved metadata record

use serde::{Deserialize, Serialize};

/// Descriptive metadata resolved from one audio file.
///
/// Every field is optional: a field is present only when a value survived
/// validation (non-empty after trim, finite positive duration, parseable
/// year). The record is built fresh per resolution call and never retained.
///
/// Serialization uses the channel's wire names (`durationMs`,
/// `artworkBytes`); absent fields are omitted entirely, so an unresolvable
/// file serializes as an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// Track title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Artist name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Album name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Four-digit release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Duration in whole milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Raw embedded artwork bytes (JPEG/PNG as stored in the file)
    #[serde(
        default,
        rename = "artworkBytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub artwork: Option<Vec<u8>>,
}

impl MetadataRecord {
    /// Create an all-absent record
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no field resolved at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.duration_ms.is_none()
            && self.artwork.is_none()
    }
}
