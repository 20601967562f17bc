//! Startup wiring for the native bridge

use crate::entitlement::{siri_entitlement_declared, VoiceAuthorizer};
use crate::messenger::Messenger;
use crate::metadata_channel::{MetadataChannel, METADATA_CHANNEL};
use crate::playback_channel::{ChannelSurface, PlaybackChannel, PLAYBACK_CHANNEL};
use aria_core::MetadataSource;
use aria_intents::IntentRouter;
use aria_metadata::Resolver;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Owns the dispatcher state: both messenger directions, the resolver, the
/// router, and the one-shot registration guard.
///
/// The guard lives here, not in the router, so the router stays
/// constructible and testable with no registration state at all.
pub struct Bridge<S> {
    inbound: Arc<Messenger>,
    outbound: Arc<Messenger>,
    resolver: Arc<Resolver<S>>,
    router: Arc<IntentRouter>,
    registered: AtomicBool,
}

impl<S: MetadataSource + 'static> Bridge<S> {
    /// Create an unregistered bridge over the given platform source
    pub fn new(source: S) -> Self {
        Self {
            inbound: Arc::new(Messenger::new()),
            outbound: Arc::new(Messenger::new()),
            resolver: Arc::new(Resolver::new(source)),
            router: Arc::new(IntentRouter::new()),
            registered: AtomicBool::new(false),
        }
    }

    /// The messenger the application layer calls into
    pub fn inbound(&self) -> Arc<Messenger> {
        Arc::clone(&self.inbound)
    }

    /// The messenger carrying outbound invocations toward the application
    /// layer
    pub fn outbound(&self) -> Arc<Messenger> {
        Arc::clone(&self.outbound)
    }

    /// The intent router, for wiring the OS-level trigger adapters
    pub fn router(&self) -> Arc<IntentRouter> {
        Arc::clone(&self.router)
    }

    /// Register both channels and attach the outbound surface.
    ///
    /// Idempotent: performed at most once per bridge lifetime regardless of
    /// how often it is invoked. Returns whether this call performed the
    /// registration.
    pub async fn register_channels(&self) -> bool {
        if self.registered.swap(true, Ordering::SeqCst) {
            debug!("channels already registered, skipping");
            return false;
        }

        self.inbound
            .register_handler(
                METADATA_CHANNEL,
                Arc::new(MetadataChannel::new(Arc::clone(&self.resolver))),
            )
            .await;
        self.inbound
            .register_handler(
                PLAYBACK_CHANNEL,
                Arc::new(PlaybackChannel::new(Arc::clone(&self.router))),
            )
            .await;
        self.router
            .attach_surface(Arc::new(ChannelSurface::new(Arc::clone(&self.outbound))));
        true
    }

    /// Full startup sequence: channel registration plus the one-time
    /// entitlement probe, prompting for voice authorization when entitled.
    pub async fn setup(&self, profile_path: &Path, authorizer: &dyn VoiceAuthorizer) {
        self.register_channels().await;
        if siri_entitlement_declared(profile_path) {
            authorizer.request_authorization();
        }
    }
}
