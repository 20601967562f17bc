//! Rank-merge resolution over a platform `MetadataSource`

use crate::error::ResolutionFault;
use aria_core::{MetadataRecord, MetadataSource, TagSnapshot};
use std::path::PathBuf;
use tracing::debug;

/// Metadata resolver.
///
/// `resolve` never fails: any fault (missing file, corrupt container,
/// unsupported codec) degrades to an all-absent record. Each call opens its
/// own handle and produces an independent record, so concurrent calls do
/// not interfere.
pub struct Resolver<S> {
    source: S,
}

impl<S: MetadataSource> Resolver<S> {
    /// Create a resolver over the given platform source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve metadata for a local file path or `file://` URL.
    ///
    /// A blank path is a legitimate "nothing selected" signal from the
    /// caller: it returns an all-absent record synchronously without
    /// touching the backend and is not logged as a failure.
    pub fn resolve(&self, path: &str) -> MetadataRecord {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return MetadataRecord::new();
        }

        match self.try_resolve(trimmed) {
            Ok(record) => record,
            Err(fault) => {
                debug!(path = trimmed, %fault, "metadata resolution degraded to empty record");
                MetadataRecord::new()
            }
        }
    }

    /// Fallible resolution, kept internal so the public contract stays
    /// infallible while tests can still assert on the fault taxonomy.
    pub(crate) fn try_resolve(&self, path: &str) -> aria_core::Result<MetadataRecord> {
        let path = local_path(path)?;
        let snapshot = self.source.open(&path)?;
        Ok(merge(snapshot))
    }
}

/// Accept plain paths and `file://` URLs; other schemes cannot name a
/// local file.
fn local_path(path: &str) -> Result<PathBuf, ResolutionFault> {
    if !path.starts_with("file://") {
        return Ok(PathBuf::from(path));
    }
    url::Url::parse(path)
        .ok()
        .and_then(|u| u.to_file_path().ok())
        .ok_or_else(|| ResolutionFault::NotLocal(path.to_string()))
}

/// Merge one snapshot into the final record, field by field.
fn merge(snapshot: TagSnapshot) -> MetadataRecord {
    let TagSnapshot {
        common,
        format_specific,
        vendor,
        duration_seconds,
    } = snapshot;

    // Rank 1 is the baseline; rank 2 only fills fields the baseline left
    // absent or empty.
    let title = normalized(common.title).or_else(|| normalized(format_specific.title));
    let artist = normalized(common.artist).or_else(|| normalized(format_specific.artist));
    let album = normalized(common.album).or_else(|| normalized(format_specific.album));
    let mut genre = normalized(common.genre).or_else(|| normalized(format_specific.genre));
    let mut year = common.year.or(format_specific.year);

    // Vendor tags are consulted only while the year is unresolved. The
    // vendor genre fills a still-absent genre on the same pass.
    if year.is_none() {
        if let Some(date) = vendor.release_date.as_deref() {
            year = year_from_release_date(date);
        }
        if genre.is_none() {
            genre = normalized(vendor.genre);
        }
    }

    MetadataRecord {
        title,
        artist,
        album,
        genre,
        year,
        duration_ms: duration_to_ms(duration_seconds),
        artwork: pick_artwork(common.artwork, format_specific.artwork),
    }
}

/// Trim and drop empty strings; absent and empty are the same outcome.
fn normalized(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The leading four characters of a free-text release date, accepted only
/// as a four-digit year.
fn year_from_release_date(date: &str) -> Option<i32> {
    let prefix: String = date.trim().chars().take(4).collect();
    if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

/// Whole milliseconds from a container-reported duration; non-finite, zero,
/// and negative durations are absent.
fn duration_to_ms(seconds: Option<f64>) -> Option<u64> {
    let seconds = seconds?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    Some((seconds * 1000.0).round() as u64)
}

/// First non-empty artwork blob wins, common slot preferred.
fn pick_artwork(common: Option<Vec<u8>>, fallback: Option<Vec<u8>>) -> Option<Vec<u8>> {
    common
        .filter(|bytes| !bytes.is_empty())
        .or_else(|| fallback.filter(|bytes| !bytes.is_empty()))
}
