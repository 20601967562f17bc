//! In-process method-call messenger
//!
//! Models the generic request/response channel between the application
//! layer and the native layer: one handler per channel name, one call per
//! request, one outcome per call. The transport itself (reliability,
//! process boundary) is assumed and out of scope.
use async_trait::async_trait;
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One inbound method invocation.
#[derive(Debug, Clone)]
pub struct MethodCall {
    /// Method name within the channel
    pub method: String,
    /// Key-value arguments
    pub args: Value,
}

/// The single response to a method call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodOutcome {
    /// The call succeeded with a payload (possibly an empty mapping)
    Success(Value),
    /// The call failed with a stable error code
    Error {
        /// Stable machine-readable code (e.g. `INVALID_ARGUMENT`)
        code: String,
        /// Human-readable description
        message: String,
    },
    /// The channel does not implement the requested method
    NotImplemented,
}

impl MethodOutcome {
    /// Build an error outcome
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A channel-scoped method handler.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Handle one call; exactly one outcome per call.
    async fn handle(&self, call: MethodCall) -> MethodOutcome;
}

/// Registry of channel handlers for one direction of the transport.
#[derive(Default)]
pub struct Messenger {
    handlers: RwLock<HashMap<String, Arc<dyn MethodHandler>>>,
}

impl Messenger {
    /// Create an empty messenger
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a handler for a channel name.
    ///
    /// Returns `false` without replacing anything when the name is already
    /// taken; a channel is wired at most once.
    pub async fn register_handler(
        &self,
        channel: impl Into<String>,
        handler: Arc<dyn MethodHandler>,
    ) -> bool {
        let mut handlers = self.handlers.write().await;
        match handlers.entry(channel.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handler);
                true
            }
        }
    }

    /// Invoke a method on a channel.
    ///
    /// An unknown channel behaves like an unknown method: the caller gets
    /// `NotImplemented`, never an error.
    pub async fn invoke(&self, channel: &str, method: &str, args: Value) -> MethodOutcome {
        let handler = self.handlers.read().await.get(channel).cloned();
        match handler {
            Some(handler) => {
                handler
                    .handle(MethodCall {
                        method: method.to_string(),
                        args,
                    })
                    .await
            }
            None => MethodOutcome::NotImplemented,
        }
    }
}
