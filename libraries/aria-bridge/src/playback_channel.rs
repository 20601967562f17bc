//! The `siri_playback` channel: inbound handler and outbound surface

use crate::messenger::{Messenger, MethodCall, MethodHandler, MethodOutcome};
use aria_core::PlaybackSink;
use aria_intents::IntentRouter;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Channel name shared by both directions of the playback flow
pub const PLAYBACK_CHANNEL: &str = "siri_playback";

/// Handles inbound `play` calls from the application/OS side.
pub struct PlaybackChannel {
    router: Arc<IntentRouter>,
}

impl PlaybackChannel {
    /// Create a handler over a shared router
    pub fn new(router: Arc<IntentRouter>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl MethodHandler for PlaybackChannel {
    async fn handle(&self, call: MethodCall) -> MethodOutcome {
        if call.method != "play" {
            return MethodOutcome::NotImplemented;
        }

        let item_id = call.args.get("itemId").and_then(Value::as_str);
        match self.router.handle_play_call(item_id) {
            Ok(()) => MethodOutcome::Success(Value::Null),
            Err(err) => MethodOutcome::error(err.code(), err.to_string()),
        }
    }
}

/// The application surface as seen by the router: forwards each intent as
/// one outbound `play` invocation toward the application layer.
pub struct ChannelSurface {
    outbound: Arc<Messenger>,
}

impl ChannelSurface {
    /// Create a surface over the outbound messenger
    pub fn new(outbound: Arc<Messenger>) -> Self {
        Self { outbound }
    }
}

impl PlaybackSink for ChannelSurface {
    fn play(&self, item_id: &str) {
        // Best-effort notification: without a runtime there is no
        // application layer to deliver to, so the intent is dropped.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(item_id, "no runtime available, dropping outbound play");
            return;
        };

        let outbound = Arc::clone(&self.outbound);
        let item_id = item_id.to_string();
        handle.spawn(async move {
            let args = json!({ "itemId": item_id });
            let outcome = outbound.invoke(PLAYBACK_CHANNEL, "play", args).await;
            if let MethodOutcome::Error { code, message } = outcome {
                warn!(code = %code, message = %message, "outbound play rejected by application layer");
            }
        });
    }
}
