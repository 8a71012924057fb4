//! Correlated RPC client running inside each hosted context.
//!
//! Call flow:
//! 1. `call()` draws a fresh correlation id and registers a oneshot sender
//!    under it.
//! 2. The tagged [`Command`] goes out over the channel adapter.
//! 3. The caller awaits the oneshot under `tokio::time::timeout`.
//! 4. A matching [`Response`] (or the deadline) settles the call and removes
//!    the pending entry — exactly once, whichever comes first.
//!
//! Responses whose id has no pending entry (already settled, foreign, stale)
//! are silently ignored.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot, Mutex};

use tabhost_common::{IdGen, RpcError};

use crate::channel::MessageSender;
use crate::config::RpcConfig;
use crate::message::{commands, Command, Response};

type Pending = Mutex<HashMap<String, oneshot::Sender<Result<Value, RpcError>>>>;

pub struct RpcClient {
    sender: Box<dyn MessageSender>,
    pending: Pending,
    ids: Mutex<IdGen>,
    /// Window id assigned by the host on a successful `connect`.
    window_id: Mutex<Option<String>>,
    call_timeout: Duration,
}

impl RpcClient {
    pub fn new(sender: Box<dyn MessageSender>, config: &RpcConfig) -> Self {
        Self {
            sender,
            pending: Mutex::new(HashMap::new()),
            ids: Mutex::new(IdGen::new("m")),
            window_id: Mutex::new(None),
            call_timeout: config.call_timeout(),
        }
    }

    /// The id assigned by the host, once registered.
    pub async fn window_id(&self) -> Option<String> {
        self.window_id.lock().await.clone()
    }

    /// Issue a command and await its response under the configured deadline.
    ///
    /// Fails with `NotRegistered` before anything is sent unless the client
    /// already holds an assigned id; `connect` itself is exempt.
    pub async fn call(&self, command: &str, args: Option<Value>) -> Result<Value, RpcError> {
        if command != commands::CONNECT && self.window_id.lock().await.is_none() {
            return Err(RpcError::NotRegistered);
        }

        let id = self.ids.lock().await.next_id();
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id.clone(), tx);

        let payload = serde_json::to_value(Command::new(&id, command, args))?;
        if self.sender.send(payload).is_err() {
            self.pending.lock().await.remove(&id);
            return Err(RpcError::ChannelClosed);
        }

        tracing::debug!(id = %id, command, "call sent");

        match tokio::time::timeout(self.call_timeout, rx).await {
            Ok(Ok(settled)) => settled,
            Ok(Err(_)) => Err(RpcError::ChannelClosed),
            Err(_) => {
                self.pending.lock().await.remove(&id);
                tracing::debug!(id = %id, command, "call timed out");
                Err(RpcError::Timeout)
            }
        }
    }

    /// Feed one raw payload from the channel into the correlation table.
    ///
    /// Anything that does not parse as a [`Response`] for a pending call is
    /// dropped without effect.
    pub async fn handle_message(&self, raw: &Value) {
        let Some(response) = Response::parse(raw) else {
            return;
        };
        let Some(tx) = self.pending.lock().await.remove(&response.id) else {
            tracing::trace!(id = %response.id, "response without pending call; ignoring");
            return;
        };
        let settled = match response.error {
            Some(message) => Err(RpcError::Remote(message)),
            None => Ok(response.result.unwrap_or(Value::Null)),
        };
        // The caller may have timed out in the meantime; nothing to do then.
        let _ = tx.send(settled);
    }

    /// Pump an inbound receiver into the correlation table until the host
    /// side closes.
    pub async fn run(self: Arc<Self>, mut inbound: mpsc::UnboundedReceiver<Value>) {
        while let Some(raw) = inbound.recv().await {
            self.handle_message(&raw).await;
        }
        tracing::debug!("client inbound channel closed");
    }

    /// Register with the host and store the assigned window id.
    ///
    /// On failure the client logs and stays unregistered; there is no retry.
    pub async fn connect(&self) {
        match self.call(commands::CONNECT, None).await {
            Ok(value) => match value.as_str() {
                Some(id) => {
                    *self.window_id.lock().await = Some(id.to_string());
                    tracing::info!(window_id = %id, "registered window");
                }
                None => tracing::warn!("connect result is not a window id"),
            },
            Err(e) => tracing::warn!(error = %e, "register window failed"),
        }
    }

    /// Window ids in tab order.
    pub async fn list_windows(&self) -> Result<Vec<String>, RpcError> {
        let value = self.call(commands::LIST, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Ask the host to close this client's own window. Best effort.
    pub async fn close_window(&self) {
        let Some(id) = self.window_id().await else {
            tracing::warn!("window not registered!");
            return;
        };
        if let Err(e) = self.call(commands::CLOSE, Some(Value::String(id))).await {
            tracing::warn!(error = %e, "close window failed");
        }
    }

    #[cfg(test)]
    pub(crate) async fn pending_len(&self) -> usize {
        self.pending.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn force_register(&self, id: &str) {
        *self.window_id.lock().await = Some(id.to_string());
    }
}
