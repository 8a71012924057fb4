//! Open, close, and reorder operations.

use tabhost_common::{clamp, WindowError};

use crate::window::Window;

use super::types::{OpenWindowOpts, WindowManager};

impl WindowManager {
    /// Open a window for `href`. Re-opening an existing id does not create a
    /// second entry; it only (re)focuses the window. Returns the id.
    pub fn open_window(&mut self, href: &str, opts: OpenWindowOpts) -> String {
        let id = opts.id.unwrap_or_else(|| self.ids.next_id());

        if !self.registry.has(&id) {
            let content = self.surface.create_content(href);
            let title = opts.title.unwrap_or_else(|| id.clone());
            let window = Window::new(id.clone(), content, title, opts.fixed);
            self.surface.attach(&window);
            self.registry.set(window);
            tracing::info!(id = %id, href, "window opened");
        }

        if !opts.in_background {
            // The id is present by now, so this cannot fail.
            let _ = self.focus(&id);
        }
        id
    }

    /// Close a window, then refocus the entry now occupying the closed slot
    /// (clamped to the new tail). Fixed windows refuse to close.
    pub fn close_window(&mut self, id: &str) -> Result<(), WindowError> {
        let index = self.registry.index_of(id).ok_or(WindowError::NotFound)?;
        if self.registry.get_at(index).is_some_and(|w| w.fixed) {
            return Err(WindowError::Fixed);
        }

        self.surface.detach(id);
        if let Some(mut window) = self.registry.delete(id) {
            window.mark_closed();
        }
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        tracing::info!(id, "window closed");

        if self.registry.is_empty() {
            return Ok(());
        }
        let target = clamp(index, 0, self.registry.len() - 1);
        self.focus_at(target)
    }

    /// Best-effort bulk close over a snapshot of current ids. Fixed or
    /// already-gone windows are skipped so they cannot block the rest.
    pub fn close_all_windows(&mut self) {
        for id in self.registry.keys() {
            if let Err(e) = self.close_window(&id) {
                tracing::debug!(id = %id, error = %e, "skipped during close-all");
            }
        }
    }

    /// Commit a reorder. This is the registry side of a drag settling; the
    /// drag controller's `on_end` lands here.
    pub fn move_window(&mut self, from: usize, to: usize) -> Result<(), WindowError> {
        if from >= self.registry.len() || to >= self.registry.len() {
            return Err(WindowError::NotFound);
        }
        self.registry.move_from(from, to);
        self.surface.move_tab(from, to);
        tracing::debug!(from, to, "window moved");
        Ok(())
    }

    /// Window ids in tab order.
    pub fn list_windows(&self) -> Vec<String> {
        self.registry.keys()
    }
}
