//! Message channel adapter between hosted contexts and the host.
//!
//! The core assumes nothing about the transport beyond "best-effort,
//! point-to-point": payloads may be dropped, duplicated, reordered, or belong
//! to an unrelated protocol sharing the channel. The in-memory endpoints here
//! back the tests and the headless demo; a real embedding supplies its own
//! [`MessageSender`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

use tabhost_common::ChannelError;

/// Opaque handle identifying one live hosted context.
///
/// The host resolves which window entity owns an incoming message by matching
/// this handle against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(pub u32);

impl std::fmt::Display for ContentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "content#{}", self.0)
    }
}

/// Sending half of a point-to-point channel. Best effort, no delivery or
/// ordering guarantee.
pub trait MessageSender: Send + Sync {
    fn send(&self, payload: Value) -> Result<(), ChannelError>;
}

/// Host-bound sender used by a hosted context; tags each payload with the
/// sending context so the host can reply and match registry entries.
pub struct HostBoundSender {
    content: ContentRef,
    tx: mpsc::UnboundedSender<(ContentRef, Value)>,
}

impl MessageSender for HostBoundSender {
    fn send(&self, payload: Value) -> Result<(), ChannelError> {
        self.tx
            .send((self.content, payload))
            .map_err(|_| ChannelError::Disconnected)
    }
}

/// Context-bound sender used by the host to reply to one hosted context.
pub struct ContextBoundSender {
    tx: mpsc::UnboundedSender<Value>,
}

impl MessageSender for ContextBoundSender {
    fn send(&self, payload: Value) -> Result<(), ChannelError> {
        self.tx.send(payload).map_err(|_| ChannelError::Disconnected)
    }
}

/// Both ends of an in-memory channel between one hosted context and the host.
pub struct ChannelPair {
    /// Given to the hosted context's RPC client.
    pub to_host: HostBoundSender,
    /// Inbound queue the hosted context pumps into its RPC client.
    pub from_host: mpsc::UnboundedReceiver<Value>,
    /// Kept by the host for replies to this context.
    pub reply: ContextBoundSender,
}

/// Wire one hosted context to the host's shared inbound queue.
pub fn channel_pair(
    content: ContentRef,
    host_inbound: &mpsc::UnboundedSender<(ContentRef, Value)>,
) -> ChannelPair {
    let (reply_tx, from_host) = mpsc::unbounded_channel();
    ChannelPair {
        to_host: HostBoundSender {
            content,
            tx: host_inbound.clone(),
        },
        from_host,
        reply: ContextBoundSender { tx: reply_tx },
    }
}
