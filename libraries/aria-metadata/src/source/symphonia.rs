/// Metadata source implementation using symphonia
use crate::error::ResolutionFault;
use aria_core::{MetadataSource, TagBlock, TagSnapshot};
use std::fs::File;
use std::path::Path;
use symphonia::core::codecs::CODEC_TYPE_NULL;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey, StandardVisualKey};
use symphonia::core::probe::Hint;

/// Metadata source backed by symphonia (the alternate facility).
///
/// Rank mapping: the container-level metadata revision is the common view;
/// tags picked up during probing (e.g. an ID3v2 block read ahead of the
/// container) are the format-specific fallback. Date-like tags feed the
/// vendor release-date slot on either revision.
pub struct SymphoniaSource;

impl SymphoniaSource {
    /// Create a new symphonia source
    pub fn new() -> Self {
        Self
    }
}

impl Default for SymphoniaSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for SymphoniaSource {
    fn open(&self, path: &Path) -> aria_core::Result<TagSnapshot> {
        let file = File::open(path).map_err(ResolutionFault::from)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let mut probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| ResolutionFault::Container(e.to_string()))?;

        let mut snapshot = TagSnapshot::default();

        if let Some(track) = probed
            .format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        {
            if let (Some(time_base), Some(n_frames)) =
                (track.codec_params.time_base, track.codec_params.n_frames)
            {
                let time = time_base.calc_time(n_frames);
                snapshot.duration_seconds = Some(time.seconds as f64 + time.frac);
            }
        }

        if let Some(rev) = probed.format.metadata().current() {
            snapshot.common = block_from_revision(rev);
            snapshot.vendor.release_date = release_date_from(rev);
        }
        if let Some(metadata) = probed.metadata.get() {
            if let Some(rev) = metadata.current() {
                snapshot.format_specific = block_from_revision(rev);
                if snapshot.vendor.release_date.is_none() {
                    snapshot.vendor.release_date = release_date_from(rev);
                }
            }
        }

        Ok(snapshot)
    }
}

/// Extract one block from a metadata revision.
fn block_from_revision(rev: &MetadataRevision) -> TagBlock {
    let mut block = TagBlock::default();

    for tag in rev.tags() {
        let value = tag.value.to_string();
        if value.is_empty() {
            continue;
        }
        match tag.std_key {
            Some(StandardTagKey::TrackTitle) => block.title = Some(value),
            Some(StandardTagKey::Artist) => block.artist = Some(value),
            Some(StandardTagKey::Album) => block.album = Some(value),
            Some(StandardTagKey::Genre) => block.genre = Some(value),
            _ => {}
        }
    }

    block.artwork = front_cover(rev);
    block
}

/// First non-empty visual, front cover preferred.
fn front_cover(rev: &MetadataRevision) -> Option<Vec<u8>> {
    rev.visuals()
        .iter()
        .find(|visual| {
            matches!(visual.usage, Some(StandardVisualKey::FrontCover)) && !visual.data.is_empty()
        })
        .or_else(|| rev.visuals().iter().find(|visual| !visual.data.is_empty()))
        .map(|visual| visual.data.to_vec())
}

/// Free-text date tag, if any; the resolver validates the year prefix.
fn release_date_from(rev: &MetadataRevision) -> Option<String> {
    rev.tags().iter().find_map(|tag| match tag.std_key {
        Some(
            StandardTagKey::Date
            | StandardTagKey::ReleaseDate
            | StandardTagKey::OriginalDate,
        ) => {
            let value = tag.value.to_string();
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resolver;
    use std::io::Write;

    #[test]
    fn unprobeable_bytes_are_a_fault() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an audio container").unwrap();

        let source = SymphoniaSource::new();
        assert!(source.open(file.path()).is_err());
    }

    #[test]
    fn resolver_degrades_unreadable_files_to_empty_records() {
        let resolver = Resolver::new(SymphoniaSource::new());
        assert!(resolver.resolve("/nonexistent/file.mp3").is_empty());
    }
}
