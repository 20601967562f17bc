//! Raw tag material read by a platform backend, before rank merging.
//!
//! A backend reads whatever tag representations the file carries and sorts
//! them into three ranks. The resolver merges the ranks field by field; the
//! snapshot itself never leaves the resolver.

/// One tag block as read from a single underlying representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBlock {
    /// Track title
    pub title: Option<String>,
    /// Artist name
    pub artist: Option<String>,
    /// Album name
    pub album: Option<String>,
    /// Genre
    pub genre: Option<String>,
    /// Release year, where the representation stores it as an integer
    pub year: Option<i32>,
    /// Embedded picture bytes
    pub artwork: Option<Vec<u8>>,
}

/// Vendor/extension tags consulted only as a last-resort fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorBlock {
    /// Free-text release date (e.g. `"2006-05-16"`); the resolver takes the
    /// leading four digits as the year
    pub release_date: Option<String>,
    /// Vendor genre tag
    pub genre: Option<String>,
}

/// Everything one backend read from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSnapshot {
    /// Rank 1: the platform-normalized common tag view
    pub common: TagBlock,
    /// Rank 2: a format-specific tag block, used to fill gaps only
    pub format_specific: TagBlock,
    /// Rank 3: vendor extension tags
    pub vendor: VendorBlock,
    /// Container-reported duration in seconds
    pub duration_seconds: Option<f64>,
}
