//! Capability boundary toward the hosting/rendering embedding.
//!
//! The manager never touches concrete elements; it asks the surface to
//! create hosted contexts, attach/detach their tabs, and toggle the active
//! visual state. Real embeddings implement this against their UI layer; the
//! noop surface backs tests and headless runs.

use tabhost_protocol::ContentRef;

use crate::window::Window;

pub trait Surface {
    /// Create an embeddable hosted context for `href` and return its handle.
    fn create_content(&mut self, href: &str) -> ContentRef;

    /// A window was inserted; create its tab and panel.
    fn attach(&mut self, window: &Window);

    /// A window is closing; remove its visual representation.
    fn detach(&mut self, id: &str);

    /// Toggle the "active" state of a window's tab and panel.
    fn set_active(&mut self, id: &str, active: bool);

    /// A reorder committed; reparent the tab from `from` into slot `to`.
    fn move_tab(&mut self, from: usize, to: usize);
}

/// Surface that renders nothing. Hands out fresh content handles so the
/// registry and RPC matching still work.
#[derive(Debug, Default)]
pub struct NoopSurface {
    next_content: u32,
}

impl NoopSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for NoopSurface {
    fn create_content(&mut self, _href: &str) -> ContentRef {
        self.next_content += 1;
        ContentRef(self.next_content)
    }

    fn attach(&mut self, _window: &Window) {}

    fn detach(&mut self, _id: &str) {}

    fn set_active(&mut self, _id: &str, _active: bool) {}

    fn move_tab(&mut self, _from: usize, _to: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_surface_hands_out_fresh_handles() {
        let mut surface = NoopSurface::new();
        let a = surface.create_content("/page1");
        let b = surface.create_content("/page2");
        assert_ne!(a, b);
    }
}
