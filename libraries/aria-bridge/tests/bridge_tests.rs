//! End-to-end tests over the in-process messenger: the dispatcher contract
//! as the application layer sees it.

use aria_bridge::{
    Bridge, MethodCall, MethodHandler, MethodOutcome, VoiceAuthorizer, METADATA_CHANNEL,
    PLAYBACK_CHANNEL,
};
use aria_core::{MetadataSource, TagBlock, TagSnapshot};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Backend fake replaying one snapshot and counting opens.
struct ScriptedSource {
    snapshot: TagSnapshot,
    opens: Arc<AtomicUsize>,
}

impl ScriptedSource {
    fn new(snapshot: TagSnapshot) -> (Self, Arc<AtomicUsize>) {
        let opens = Arc::new(AtomicUsize::new(0));
        (
            Self {
                snapshot,
                opens: opens.clone(),
            },
            opens,
        )
    }
}

impl MetadataSource for ScriptedSource {
    fn open(&self, _path: &Path) -> aria_core::Result<TagSnapshot> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.clone())
    }
}

/// Outbound handler forwarding every call into a test channel.
struct ForwardingHandler {
    tx: mpsc::UnboundedSender<MethodCall>,
}

#[async_trait]
impl MethodHandler for ForwardingHandler {
    async fn handle(&self, call: MethodCall) -> MethodOutcome {
        let _ = self.tx.send(call);
        MethodOutcome::Success(Value::Null)
    }
}

fn tagged_snapshot() -> TagSnapshot {
    TagSnapshot {
        common: TagBlock {
            title: Some("Song".into()),
            artist: Some("Artist".into()),
            ..TagBlock::default()
        },
        duration_seconds: Some(180.4),
        ..TagSnapshot::default()
    }
}

async fn registered_bridge(snapshot: TagSnapshot) -> (Bridge<ScriptedSource>, Arc<AtomicUsize>) {
    let (source, opens) = ScriptedSource::new(snapshot);
    let bridge = Bridge::new(source);
    bridge.register_channels().await;
    (bridge, opens)
}

async fn outbound_receiver(bridge: &Bridge<ScriptedSource>) -> mpsc::UnboundedReceiver<MethodCall> {
    let (tx, rx) = mpsc::unbounded_channel();
    bridge
        .outbound()
        .register_handler(PLAYBACK_CHANNEL, Arc::new(ForwardingHandler { tx }))
        .await;
    rx
}

#[tokio::test]
async fn blank_file_path_returns_empty_mapping_without_opening_a_handle() {
    let (bridge, opens) = registered_bridge(tagged_snapshot()).await;

    for args in [json!({ "filePath": "" }), json!({ "filePath": "   " }), json!({})] {
        let outcome = bridge.inbound().invoke(METADATA_CHANNEL, "read", args).await;
        assert_eq!(outcome, MethodOutcome::Success(json!({})));
    }
    assert_eq!(opens.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn read_replies_with_the_resolved_mapping() {
    let (bridge, _) = registered_bridge(tagged_snapshot()).await;

    let outcome = bridge
        .inbound()
        .invoke(METADATA_CHANNEL, "read", json!({ "filePath": "/music/song.mp3" }))
        .await;

    let MethodOutcome::Success(payload) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(payload["title"], "Song");
    assert_eq!(payload["artist"], "Artist");
    assert_eq!(payload["durationMs"], 180_400);
    assert!(payload.get("album").is_none());
    assert!(payload.get("artworkBytes").is_none());
}

#[tokio::test]
async fn unknown_methods_and_channels_are_not_implemented() {
    let (bridge, _) = registered_bridge(TagSnapshot::default()).await;

    let outcome = bridge
        .inbound()
        .invoke(METADATA_CHANNEL, "write", json!({}))
        .await;
    assert_eq!(outcome, MethodOutcome::NotImplemented);

    let outcome = bridge
        .inbound()
        .invoke("unknown_channel", "read", json!({}))
        .await;
    assert_eq!(outcome, MethodOutcome::NotImplemented);
}

#[tokio::test]
async fn direct_play_without_item_id_is_an_invalid_argument_error() {
    let (bridge, _) = registered_bridge(TagSnapshot::default()).await;
    let mut rx = outbound_receiver(&bridge).await;

    let outcome = bridge
        .inbound()
        .invoke(PLAYBACK_CHANNEL, "play", json!({}))
        .await;
    let MethodOutcome::Error { code, .. } = outcome else {
        panic!("expected error, got {outcome:?}");
    };
    assert_eq!(code, "INVALID_ARGUMENT");

    let delivered = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(delivered.is_err(), "no outbound call expected");
}

#[tokio::test]
async fn direct_play_forwards_one_outbound_call() {
    let (bridge, _) = registered_bridge(TagSnapshot::default()).await;
    let mut rx = outbound_receiver(&bridge).await;

    let outcome = bridge
        .inbound()
        .invoke(PLAYBACK_CHANNEL, "play", json!({ "itemId": "abc123" }))
        .await;
    assert_eq!(outcome, MethodOutcome::Success(Value::Null));

    let call = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("outbound call")
        .expect("channel open");
    assert_eq!(call.method, "play");
    assert_eq!(call.args, json!({ "itemId": "abc123" }));
}

#[tokio::test]
async fn deep_link_trigger_reaches_the_application_layer() {
    let (bridge, _) = registered_bridge(TagSnapshot::default()).await;
    let mut rx = outbound_receiver(&bridge).await;

    assert!(bridge
        .router()
        .handle_open_url("musiclibraryapp://play?itemId=abc123"));
    let call = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("outbound call")
        .expect("channel open");
    assert_eq!(call.args["itemId"], "abc123");

    assert!(!bridge
        .router()
        .handle_open_url("musiclibraryapp://pause?itemId=abc123"));
    let delivered = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(delivered.is_err(), "unmatched URL must not route");
}

#[tokio::test]
async fn registration_happens_at_most_once() {
    let (source, _) = ScriptedSource::new(TagSnapshot::default());
    let bridge = Bridge::new(source);

    assert!(bridge.register_channels().await);
    assert!(!bridge.register_channels().await);

    // The channels stay wired after the redundant call.
    let outcome = bridge
        .inbound()
        .invoke(METADATA_CHANNEL, "read", json!({ "filePath": "" }))
        .await;
    assert_eq!(outcome, MethodOutcome::Success(json!({})));
}

#[derive(Default)]
struct RecordingAuthorizer {
    prompts: AtomicUsize,
}

impl VoiceAuthorizer for RecordingAuthorizer {
    fn request_authorization(&self) {
        self.prompts.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn setup_prompts_for_voice_authorization_only_when_entitled() {
    use std::io::Write;

    let mut entitled = tempfile::NamedTempFile::new().unwrap();
    write!(
        entitled,
        "<plist><dict><key>Entitlements</key><dict><key>com.apple.developer.siri</key><true/></dict></dict></plist>"
    )
    .unwrap();

    let (source, _) = ScriptedSource::new(TagSnapshot::default());
    let bridge = Bridge::new(source);
    let authorizer = RecordingAuthorizer::default();
    bridge.setup(entitled.path(), &authorizer).await;
    assert_eq!(authorizer.prompts.load(Ordering::SeqCst), 1);

    let (source, _) = ScriptedSource::new(TagSnapshot::default());
    let bridge = Bridge::new(source);
    let authorizer = RecordingAuthorizer::default();
    bridge
        .setup(Path::new("/nonexistent/profile"), &authorizer)
        .await;
    assert_eq!(authorizer.prompts.load(Ordering::SeqCst), 0);
}
