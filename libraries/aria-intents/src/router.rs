//! Trigger adapters and dispatch for playback intents

use crate::error::IntentError;
use aria_core::PlaybackSink;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;
use url::Url;

/// Activity type reported by the OS for a voice-assistant play continuation
pub const PLAY_ACTIVITY_TYPE: &str = "com.musiclibraryapp.play";

/// Key of the item identifier inside the continued activity's data
pub const MEDIA_ITEM_KEY: &str = "mediaItemId";

/// Registered deep-link scheme
pub const PLAY_URL_SCHEME: &str = "musiclibraryapp";

/// Deep-link host carrying play requests
pub const PLAY_URL_HOST: &str = "play";

/// Query parameter naming the item to play
pub const ITEM_ID_PARAM: &str = "itemId";

/// A continued user activity handed over by the OS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuedActivity {
    /// The OS activity type constant
    pub activity_type: String,
    /// The activity's associated data
    pub user_info: HashMap<String, String>,
}

/// Routes playback intents from three trigger sources into one outbound
/// `play` call on the attached application surface.
///
/// The only state is the surface slot; the router carries no registration
/// state and is constructible independent of any channel wiring.
#[derive(Default)]
pub struct IntentRouter {
    surface: RwLock<Option<Arc<dyn PlaybackSink>>>,
}

impl IntentRouter {
    /// Create a router with no surface attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the application surface that receives forwarded intents
    pub fn attach_surface(&self, sink: Arc<dyn PlaybackSink>) {
        *self.surface.write().unwrap() = Some(sink);
    }

    /// Detach the current surface; subsequent dispatches are dropped
    pub fn detach_surface(&self) {
        *self.surface.write().unwrap() = None;
    }

    /// Voice-assistant continuation trigger.
    ///
    /// Returns `true` when the activity type matches the play continuation;
    /// the intent is dispatched only if the item identifier is present and
    /// non-blank. A `false` return tells the OS the activity was not
    /// handled here.
    pub fn handle_continued_activity(&self, activity: &ContinuedActivity) -> bool {
        if activity.activity_type != PLAY_ACTIVITY_TYPE {
            return false;
        }
        if let Some(item_id) = activity.user_info.get(MEDIA_ITEM_KEY) {
            let item_id = item_id.trim();
            if !item_id.is_empty() {
                self.dispatch(item_id);
            }
        }
        true
    }

    /// Deep-link trigger for `musiclibraryapp://play?itemId=...`.
    ///
    /// Returns `true` only when the URL matched and an intent was
    /// dispatched. Any other shape (wrong scheme or host, unparseable URL,
    /// missing or blank `itemId`) is "not handled", never an error.
    pub fn handle_open_url(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if parsed.scheme() != PLAY_URL_SCHEME || parsed.host_str() != Some(PLAY_URL_HOST) {
            return false;
        }

        let item_id = parsed
            .query_pairs()
            .find(|(name, _)| name == ITEM_ID_PARAM)
            .map(|(_, value)| value.trim().to_string());
        match item_id {
            Some(item_id) if !item_id.is_empty() => {
                self.dispatch(&item_id);
                true
            }
            _ => false,
        }
    }

    /// Direct channel call.
    ///
    /// # Errors
    /// A missing or blank identifier is a caller error
    /// (`IntentError::InvalidArgument`), distinct from the "not handled"
    /// outcome of the OS-level triggers.
    pub fn handle_play_call(&self, item_id: Option<&str>) -> Result<(), IntentError> {
        match item_id.map(str::trim) {
            Some(item_id) if !item_id.is_empty() => {
                self.dispatch(item_id);
                Ok(())
            }
            _ => Err(IntentError::InvalidArgument),
        }
    }

    /// Forward one intent to the attached surface, or drop it.
    fn dispatch(&self, item_id: &str) {
        let surface = self.surface.read().unwrap().clone();
        match surface {
            Some(sink) => sink.play(item_id),
            None => debug!(item_id, "no active surface, dropping playback intent"),
        }
    }
}
