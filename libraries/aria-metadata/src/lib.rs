//! aria Metadata
//!
//! Metadata resolution for the aria bridge: given a local file path, consult
//! the platform's tag representations, reconcile partial or conflicting tag
//! blocks by source rank, and always hand back a best-effort
//! [`MetadataRecord`](aria_core::MetadataRecord); resolution never fails
//! toward the caller.
//!
//! Rank order (highest to lowest authority for textual fields):
//! 1. the platform-normalized common tag view (also the only source for
//!    duration and the preferred artwork slot),
//! 2. a format-specific tag block, filling gaps field by field,
//! 3. vendor extension tags, consulted only while the year is unresolved.
//!
//! The merge algorithm is written once against
//! [`MetadataSource`](aria_core::MetadataSource); the backend is selected at
//! build time via cargo features (`lofty` by default, `symphonia` as the
//! alternate facility).
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_metadata::{LoftySource, Resolver};
//!
//! let resolver = Resolver::new(LoftySource::new());
//! let record = resolver.resolve("/music/song.mp3");
//! if let Some(title) = record.title {
//!     println!("{title}");
//! }
//! ```

mod error;
mod resolver;
mod source;

pub use error::{ResolutionFault, Result};
pub use resolver::Resolver;
#[cfg(feature = "lofty")]
pub use source::LoftySource;
#[cfg(feature = "symphonia")]
pub use source::SymphoniaSource;
