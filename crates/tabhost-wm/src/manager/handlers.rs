//! The handler table exposed through the RPC bridge.
//!
//! Built once and injected into a [`Bridge`]; the bridge owns the table, the
//! manager is passed in per message. Argument parsing happens here so the
//! manager API stays typed.

use serde_json::Value;

use tabhost_common::WindowError;
use tabhost_protocol::message::commands;
use tabhost_protocol::{Bridge, ContentRef, Handler};

use super::types::WindowManager;

/// Handlers for the commands the host recognizes.
pub fn handler_table() -> Vec<(&'static str, Handler<WindowManager>)> {
    vec![
        (commands::CONNECT, connect),
        (commands::LIST, list),
        (commands::CLOSE, close),
    ]
}

/// Convenience: a bridge wired with the standard table.
pub fn bridge() -> Bridge<WindowManager> {
    Bridge::new(handler_table())
}

fn connect(
    mgr: &mut WindowManager,
    _args: Option<&Value>,
    source: ContentRef,
) -> Result<Value, WindowError> {
    let id = mgr.connect_window(source)?;
    Ok(Value::String(id))
}

fn list(
    mgr: &mut WindowManager,
    _args: Option<&Value>,
    _source: ContentRef,
) -> Result<Value, WindowError> {
    Ok(Value::Array(
        mgr.list_windows().into_iter().map(Value::String).collect(),
    ))
}

fn close(
    mgr: &mut WindowManager,
    args: Option<&Value>,
    _source: ContentRef,
) -> Result<Value, WindowError> {
    let id = args
        .and_then(Value::as_str)
        .ok_or_else(|| WindowError::InvalidArgs("expected window id".into()))?;
    mgr.close_window(id)?;
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::OpenWindowOpts;
    use crate::surface::NoopSurface;
    use serde_json::json;

    fn manager_with(ids: &[&str]) -> WindowManager {
        let mut mgr = WindowManager::new(Box::new(NoopSurface::new()));
        for id in ids {
            mgr.open_window(
                "/page",
                OpenWindowOpts {
                    id: Some(id.to_string()),
                    ..Default::default()
                },
            );
        }
        mgr
    }

    fn command(id: &str, command: &str, args: Option<Value>) -> Value {
        let mut raw = json!({ "type": "window-manager", "id": id, "command": command });
        if let Some(args) = args {
            raw["args"] = args;
        }
        raw
    }

    #[test]
    fn connect_returns_matched_window_id() {
        let mut mgr = manager_with(&["a"]);
        let source = mgr.registry().get("a").unwrap().content;
        let bridge = bridge();

        let reply = bridge
            .handle_message(&mut mgr, source, &command("m1", "connect", None))
            .unwrap();
        assert_eq!(reply.result, Some(json!("a")));
    }

    #[test]
    fn connect_from_unmatched_source_errors() {
        let mut mgr = manager_with(&["a"]);
        let bridge = bridge();
        let reply = bridge
            .handle_message(&mut mgr, ContentRef(999), &command("m1", "connect", None))
            .unwrap();
        assert_eq!(reply.error.as_deref(), Some("window not found."));
    }

    #[test]
    fn list_returns_ordered_ids() {
        let mut mgr = manager_with(&["a", "b", "c"]);
        let bridge = bridge();
        let reply = bridge
            .handle_message(&mut mgr, ContentRef(1), &command("m1", "list", None))
            .unwrap();
        assert_eq!(reply.result, Some(json!(["a", "b", "c"])));
    }

    #[test]
    fn close_takes_a_window_id_argument() {
        let mut mgr = manager_with(&["a", "b"]);
        let bridge = bridge();

        let reply = bridge
            .handle_message(&mut mgr, ContentRef(1), &command("m1", "close", Some(json!("a"))))
            .unwrap();
        assert!(reply.error.is_none());
        assert_eq!(mgr.list_windows(), ["b"]);

        let reply = bridge
            .handle_message(&mut mgr, ContentRef(1), &command("m2", "close", None))
            .unwrap();
        assert_eq!(
            reply.error.as_deref(),
            Some("invalid arguments: expected window id")
        );

        let reply = bridge
            .handle_message(&mut mgr, ContentRef(1), &command("m3", "close", Some(json!(5))))
            .unwrap();
        assert!(reply.error.is_some());
    }

    #[test]
    fn invalid_command_then_valid_command() {
        let mut mgr = manager_with(&["a"]);
        let bridge = bridge();

        let reply = bridge
            .handle_message(&mut mgr, ContentRef(1), &command("m1", "XXX", None))
            .unwrap();
        assert_eq!(reply.error.as_deref(), Some("invalid command 'XXX'"));

        let reply = bridge
            .handle_message(&mut mgr, ContentRef(1), &command("m2", "list", None))
            .unwrap();
        assert_eq!(reply.result, Some(json!(["a"])));
    }
}
