//! Domain types for the aria bridge

mod record;
mod tags;

pub use record::MetadataRecord;
pub use tags::{TagBlock, TagSnapshot, VendorBlock};
