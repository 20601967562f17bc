/// Metadata source implementation using lofty
use crate::error::ResolutionFault;
use aria_core::{MetadataSource, TagBlock, TagSnapshot, VendorBlock};
use lofty::{AudioFile, ItemKey, PictureType, Tag, TaggedFileExt};
use std::path::Path;

/// Metadata source backed by the lofty library (the default facility).
///
/// Rank mapping: the file's primary tag is the common view, any second tag
/// block on the same file (e.g. ID3v2 next to an APE tag) is the
/// format-specific fallback, and a third block supplies the vendor genre.
/// The free-text recording date may live on any block.
pub struct LoftySource;

impl LoftySource {
    /// Create a new lofty source
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for LoftySource {
    fn open(&self, path: &Path) -> aria_core::Result<TagSnapshot> {
        if !path.exists() {
            return Err(ResolutionFault::FileNotFound(path.to_path_buf()).into());
        }

        // The tagged file is dropped at the end of this call on every exit
        // path, releasing the underlying handle.
        let tagged_file = lofty::read_from_path(path).map_err(ResolutionFault::from)?;

        let mut snapshot = TagSnapshot {
            duration_seconds: Some(tagged_file.properties().duration().as_secs_f64()),
            ..TagSnapshot::default()
        };

        let tags = tagged_file.tags();
        let common = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());
        let common_type = common.map(Tag::tag_type);
        let secondary = tags
            .iter()
            .find(|tag| Some(tag.tag_type()) != common_type);
        let secondary_type = secondary.map(Tag::tag_type);
        let tertiary = tags.iter().find(|tag| {
            Some(tag.tag_type()) != common_type && Some(tag.tag_type()) != secondary_type
        });

        if let Some(tag) = common {
            snapshot.common = block_from_tag(tag);
        }
        if let Some(tag) = secondary {
            snapshot.format_specific = block_from_tag(tag);
        }
        snapshot.vendor = VendorBlock {
            release_date: tags
                .iter()
                .find_map(|tag| text_item(tag, &ItemKey::RecordingDate)),
            genre: tertiary.and_then(|tag| text_item(tag, &ItemKey::Genre)),
        };

        Ok(snapshot)
    }
}

/// Extract one block from a lofty tag.
fn block_from_tag(tag: &Tag) -> TagBlock {
    let mut block = TagBlock::default();

    for item in tag.items() {
        match item.key() {
            ItemKey::TrackTitle => {
                block.title = item.value().text().map(ToString::to_string);
            }
            ItemKey::TrackArtist => {
                block.artist = item.value().text().map(ToString::to_string);
            }
            ItemKey::AlbumTitle => {
                block.album = item.value().text().map(ToString::to_string);
            }
            ItemKey::Genre => {
                block.genre = item.value().text().map(ToString::to_string);
            }
            ItemKey::Year => {
                if let Some(text) = item.value().text() {
                    block.year = text.parse().ok();
                }
            }
            _ => {}
        }
    }

    block.artwork = front_cover(tag);
    block
}

/// First non-empty picture, front cover preferred.
fn front_cover(tag: &Tag) -> Option<Vec<u8>> {
    let pictures = tag.pictures();
    let picture = pictures
        .iter()
        .find(|p| matches!(p.pic_type(), PictureType::CoverFront))
        .or_else(|| pictures.first())?;

    if picture.data().is_empty() {
        None
    } else {
        Some(picture.data().to_vec())
    }
}

fn text_item(tag: &Tag, key: &ItemKey) -> Option<String> {
    tag.items()
        .find(|item| item.key() == key)
        .and_then(|item| item.value().text())
        .map(ToString::to_string)
}
