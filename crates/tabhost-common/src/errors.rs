//! Error taxonomy shared across the workspace.
//!
//! RPC failures cross the channel boundary as plain message text, so the
//! Display strings here are part of the wire contract.

use std::path::PathBuf;

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

/// Transport-level failures on a message channel endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("channel disconnected")]
    Disconnected,
}

/// Failures surfaced to a hosted context issuing RPC calls.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("timeout!")]
    Timeout,

    #[error("window not registered!")]
    NotRegistered,

    /// Error text carried back in a Response from the host.
    #[error("{0}")]
    Remote(String),

    #[error("channel closed")]
    ChannelClosed,

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl RpcError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RpcError::Timeout)
    }
}

/// Failures raised by window-manager operations and bridge handlers.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("window not found.")]
    NotFound,

    #[error("can't close fixed window!")]
    Fixed,

    #[error("invalid command '{0}'")]
    InvalidCommand(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}
