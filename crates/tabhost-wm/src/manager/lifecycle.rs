//! Window lifecycle transitions driven by the hosted content.

use tabhost_common::WindowError;
use tabhost_protocol::ContentRef;

use super::types::WindowManager;

impl WindowManager {
    /// Hosting-surface callback: the context behind `content` finished
    /// loading. Unknown handles are ignored.
    pub fn content_loaded(&mut self, content: ContentRef) {
        if let Some(window) = self.registry.find_mut(|w| w.content == content) {
            window.mark_connecting();
            tracing::debug!(id = %window.id, "content loaded");
        }
    }

    /// Handler behind the `connect` RPC: match the caller's content handle to
    /// a registry entry, mark it ready, and return its id. A foreign or stale
    /// context has no match.
    pub fn connect_window(&mut self, content: ContentRef) -> Result<String, WindowError> {
        let window = self
            .registry
            .find_mut(|w| w.content == content)
            .ok_or(WindowError::NotFound)?;
        window.mark_ready();
        tracing::info!(id = %window.id, source = %content, "window connected");
        Ok(window.id.clone())
    }
}
