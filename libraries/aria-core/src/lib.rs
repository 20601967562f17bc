//! aria Core
//!
//! Platform-agnostic types, traits, and error handling for the aria native
//! bridge.
//!
//! This crate defines:
//! - **Domain Types**: `MetadataRecord`, `TagSnapshot`, `TagBlock`
//! - **Trait Seams**: `MetadataSource` (platform tag readers), `PlaybackSink`
//!   (the application surface that receives forwarded playback intents)
//! - **Error Handling**: Unified `AriaError` and `Result` types
//!
//! The resolution and routing logic lives in `aria-metadata` and
//! `aria-intents`; this crate carries no I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, Result};
pub use traits::{MetadataSource, PlaybackSink};
pub use types::{MetadataRecord, TagBlock, TagSnapshot, VendorBlock};
