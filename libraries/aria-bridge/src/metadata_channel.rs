//! The `native_metadata` channel handler

use crate::messenger::{MethodCall, MethodHandler, MethodOutcome};
use aria_core::MetadataSource;
use aria_metadata::Resolver;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Channel name consumed by the application layer for tag reads
pub const METADATA_CHANNEL: &str = "native_metadata";

/// Handles `read` calls by resolving metadata on the blocking pool.
///
/// The reply is always a success: unresolved fields are simply absent from
/// the mapping, and a blank or missing `filePath` yields an empty mapping
/// without ever opening a platform handle.
pub struct MetadataChannel<S> {
    resolver: Arc<Resolver<S>>,
}

impl<S: MetadataSource + 'static> MetadataChannel<S> {
    /// Create a handler over a shared resolver
    pub fn new(resolver: Arc<Resolver<S>>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl<S: MetadataSource + 'static> MethodHandler for MetadataChannel<S> {
    async fn handle(&self, call: MethodCall) -> MethodOutcome {
        if call.method != "read" {
            return MethodOutcome::NotImplemented;
        }

        let path = call
            .args
            .get("filePath")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        if path.is_empty() {
            return MethodOutcome::Success(json!({}));
        }

        // Tag parsing is synchronous in the platform facility; hop onto the
        // blocking pool and reply once when it completes.
        let resolver = Arc::clone(&self.resolver);
        let record = tokio::task::spawn_blocking(move || resolver.resolve(&path))
            .await
            .unwrap_or_default();

        match serde_json::to_value(&record) {
            Ok(payload) => MethodOutcome::Success(payload),
            Err(err) => {
                debug!(%err, "record serialization failed, replying with empty mapping");
                MethodOutcome::Success(json!({}))
            }
        }
    }
}
