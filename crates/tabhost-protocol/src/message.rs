//! Wire protocol between hosted contexts and the host.
//!
//! The channel may carry unrelated traffic, so every incoming payload goes
//! through an explicit parse step before any field is trusted. Messages flow
//! in both directions:
//! - **hosted context -> host**: a [`Command`] tagged with the protocol type.
//! - **host -> hosted context**: a [`Response`] correlated by `id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type tag that namespaces our traffic on a shared channel.
pub const PROTOCOL_TYPE: &str = "window-manager";

/// Command names understood by the host.
pub mod commands {
    /// Register the calling context; result is the assigned window id.
    pub const CONNECT: &str = "connect";
    /// List window ids in tab order.
    pub const LIST: &str = "list";
    /// Close a window; args is its id.
    pub const CLOSE: &str = "close";
}

/// A correlated request from a hosted context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "type")]
    pub protocol: String,
    /// Correlation token, unique for the lifetime of the issuing client.
    pub id: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl Command {
    pub fn new(id: impl Into<String>, command: impl Into<String>, args: Option<Value>) -> Self {
        Self {
            protocol: PROTOCOL_TYPE.to_string(),
            id: id.into(),
            command: command.into(),
            args,
        }
    }

    /// Parse an untrusted payload into a `Command`.
    ///
    /// Returns `None` unless the payload carries the protocol type tag, a
    /// non-empty `id`, and a non-empty `command`. `args` stays optional.
    pub fn parse(raw: &Value) -> Option<Self> {
        let command: Command = serde_json::from_value(raw.clone()).ok()?;
        if command.protocol != PROTOCOL_TYPE || command.id.is_empty() || command.command.is_empty()
        {
            return None;
        }
        Some(command)
    }
}

/// The single reply to a [`Command`], correlated by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok(id: impl Into<String>, result: Value) -> Self {
        Self {
            id: id.into(),
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            result: None,
            error: Some(error.into()),
        }
    }

    /// Parse an untrusted payload into a `Response`. Requires a non-empty `id`.
    pub fn parse(raw: &Value) -> Option<Self> {
        let response: Response = serde_json::from_value(raw.clone()).ok()?;
        if response.id.is_empty() {
            return None;
        }
        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn command_roundtrip() {
        let cmd = Command::new("m1", commands::CLOSE, Some(json!("w2")));
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["type"], "window-manager");
        assert_eq!(value["id"], "m1");
        assert_eq!(value["command"], "close");
        assert_eq!(value["args"], "w2");
        assert_eq!(Command::parse(&value), Some(cmd));
    }

    #[test]
    fn command_without_args_omits_field() {
        let cmd = Command::new("m1", commands::LIST, None);
        let value = serde_json::to_value(&cmd).unwrap();
        assert!(value.get("args").is_none());
        assert_eq!(Command::parse(&value).unwrap().args, None);
    }

    #[test]
    fn command_parse_rejects_foreign_type_tag() {
        let raw = json!({ "type": "chat", "id": "m1", "command": "connect" });
        assert_eq!(Command::parse(&raw), None);
    }

    #[test]
    fn command_parse_rejects_missing_fields() {
        assert_eq!(Command::parse(&json!({ "type": "window-manager" })), None);
        assert_eq!(
            Command::parse(&json!({ "type": "window-manager", "id": "m1" })),
            None
        );
        assert_eq!(
            Command::parse(&json!({ "type": "window-manager", "id": "", "command": "list" })),
            None
        );
        assert_eq!(Command::parse(&json!("not an object")), None);
        assert_eq!(Command::parse(&json!(42)), None);
    }

    #[test]
    fn response_ok_and_err_are_exclusive() {
        let ok = Response::ok("m1", json!(["w1", "w2"]));
        assert!(ok.error.is_none());
        let err = Response::err("m1", "window not found.");
        assert!(err.result.is_none());
        assert_eq!(err.error.as_deref(), Some("window not found."));
    }

    #[test]
    fn response_parse_requires_id() {
        assert!(Response::parse(&json!({ "id": "m1" })).is_some());
        assert_eq!(Response::parse(&json!({ "id": "" })), None);
        assert_eq!(Response::parse(&json!({ "result": 1 })), None);
    }
}
