//! Focus transfer: blur the previous active window, activate the next.

use tabhost_common::WindowError;

use super::types::WindowManager;

impl WindowManager {
    pub fn focus(&mut self, id: &str) -> Result<(), WindowError> {
        if !self.registry.has(id) {
            return Err(WindowError::NotFound);
        }
        self.focus_window(id.to_string());
        Ok(())
    }

    pub fn focus_at(&mut self, position: usize) -> Result<(), WindowError> {
        let id = self
            .registry
            .get_at(position)
            .map(|w| w.id.clone())
            .ok_or(WindowError::NotFound)?;
        self.focus_window(id);
        Ok(())
    }

    fn focus_window(&mut self, id: String) {
        if let Some(last) = self.active.take() {
            // The previous active entry may already have been deleted.
            if self.registry.has(&last) {
                self.surface.set_active(&last, false);
            }
        }
        self.surface.set_active(&id, true);
        tracing::debug!(id = %id, "window focused");
        self.active = Some(id);
    }
}
