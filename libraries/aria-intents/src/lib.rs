//! aria Intents
//!
//! Playback-intent routing for the aria bridge: an item identifier arrives
//! from one of three trigger sources (a continued voice-assistant user
//! activity, an open-URL deep link, or a direct channel call) and is
//! funneled into one outbound `play` invocation on the currently attached
//! application surface.
//!
//! Routing is best effort. A trigger that does not match the expected shape
//! is declared "not handled" so the OS can offer it elsewhere; only a
//! direct call with a missing identifier is a caller error. A dispatch with
//! no surface attached is silently dropped, never queued or retried.

mod error;
mod router;

pub use error::IntentError;
pub use router::{
    ContinuedActivity, IntentRouter, ITEM_ID_PARAM, MEDIA_ITEM_KEY, PLAY_ACTIVITY_TYPE,
    PLAY_URL_HOST, PLAY_URL_SCHEME,
};
