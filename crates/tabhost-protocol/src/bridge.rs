//! Host-side command dispatch.
//!
//! The bridge owns a handler table built once at construction and injected by
//! the host (no closures back into the manager). It validates every incoming
//! payload, dispatches accepted commands, and produces exactly one reply per
//! accepted request; handler errors never escape the message-handling path.

use std::collections::HashMap;

use serde_json::Value;

use tabhost_common::WindowError;

use crate::channel::ContentRef;
use crate::message::{Command, Response};

/// A command handler over some host context `C`.
pub type Handler<C> = fn(&mut C, Option<&Value>, ContentRef) -> Result<Value, WindowError>;

pub struct Bridge<C> {
    handlers: HashMap<String, Handler<C>>,
}

impl<C> Bridge<C> {
    pub fn new(handlers: impl IntoIterator<Item = (&'static str, Handler<C>)>) -> Self {
        let mut bridge = Self {
            handlers: HashMap::new(),
        };
        bridge.register_handlers(handlers);
        bridge
    }

    /// Merge handlers into the table, overriding existing names.
    pub fn register_handlers(
        &mut self,
        handlers: impl IntoIterator<Item = (&'static str, Handler<C>)>,
    ) {
        for (name, handler) in handlers {
            self.handlers.insert(name.to_string(), handler);
        }
    }

    /// Handle one raw payload from `source`.
    ///
    /// Returns `None` for anything that is not a tagged, well-formed
    /// [`Command`] — the channel may carry unrelated traffic, which gets no
    /// reply. Accepted requests always yield exactly one [`Response`].
    pub fn handle_message(
        &self,
        ctx: &mut C,
        source: ContentRef,
        raw: &Value,
    ) -> Option<Response> {
        let command = Command::parse(raw)?;

        let Some(handler) = self.handlers.get(&command.command) else {
            tracing::debug!(source = %source, command = %command.command, "unknown command");
            let error = WindowError::InvalidCommand(command.command);
            return Some(Response::err(command.id, error.to_string()));
        };

        tracing::debug!(source = %source, command = %command.command, "command dispatched");
        match handler(ctx, command.args.as_ref(), source) {
            Ok(result) => Some(Response::ok(command.id, result)),
            Err(e) => Some(Response::err(command.id, e.to_string())),
        }
    }
}
