//! aria Bridge
//!
//! The request dispatcher joining the application layer to the metadata
//! resolver and the intent router:
//!
//! - **`Messenger`**: an in-process, asynchronous method-call registry
//!   modeling the request/response channel the application layer consumes.
//! - **`native_metadata` channel**: method `read` with a `filePath`
//!   argument, answered with the resolved record's key-value mapping.
//! - **`siri_playback` channel**: inbound `play` calls routed through the
//!   intent router, and outbound `play` invocations toward the application
//!   layer whenever any trigger fires.
//! - **`Bridge::setup`**: the startup sequence, covering once-only channel
//!   registration, surface attachment, and the voice-assistant entitlement
//!   probe.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_bridge::Bridge;
//! use aria_metadata::LoftySource;
//! use serde_json::json;
//!
//! # async fn example() {
//! let bridge = Bridge::new(LoftySource::new());
//! bridge.register_channels().await;
//!
//! let outcome = bridge
//!     .inbound()
//!     .invoke("native_metadata", "read", json!({ "filePath": "/music/song.mp3" }))
//!     .await;
//! # let _ = outcome;
//! # }
//! ```

mod bridge;
mod entitlement;
mod messenger;
mod metadata_channel;
mod playback_channel;

pub use bridge::Bridge;
pub use entitlement::{siri_entitlement_declared, VoiceAuthorizer, SIRI_ENTITLEMENT_KEY};
pub use messenger::{Messenger, MethodCall, MethodHandler, MethodOutcome};
pub use metadata_channel::{MetadataChannel, METADATA_CHANNEL};
pub use playback_channel::{ChannelSurface, PlaybackChannel, PLAYBACK_CHANNEL};
