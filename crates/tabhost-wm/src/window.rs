//! The window entity and its lifecycle state machine.

use serde::{Deserialize, Serialize};

use tabhost_protocol::ContentRef;

/// Lifecycle of a window's hosted content.
///
/// `Init -> Connecting -> Ready`, with `Closed` terminal. `Connecting` means
/// the content has loaded but has not yet registered over RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Init,
    Connecting,
    Ready,
    Closed,
}

/// One tab/window entry: an id, the hosted context it presents, and UI state.
/// Position lives in the registry, not here.
#[derive(Debug, Clone)]
pub struct Window {
    pub id: String,
    /// Opaque handle to the hosted context shown in this window.
    pub content: ContentRef,
    pub title: String,
    /// Fixed windows cannot be closed.
    pub fixed: bool,
    pub state: WindowState,
}

impl Window {
    pub fn new(id: impl Into<String>, content: ContentRef, title: impl Into<String>, fixed: bool) -> Self {
        Self {
            id: id.into(),
            content,
            title: title.into(),
            fixed,
            state: WindowState::Init,
        }
    }

    /// Content finished loading. Only meaningful from `Init`.
    pub fn mark_connecting(&mut self) {
        if self.state == WindowState::Init {
            self.state = WindowState::Connecting;
        }
    }

    /// Content registered over RPC. A context may connect without a separate
    /// load notification, so `Init` is accepted as well as `Connecting`.
    pub fn mark_ready(&mut self) {
        if matches!(self.state, WindowState::Init | WindowState::Connecting) {
            self.state = WindowState::Ready;
        }
    }

    /// Terminal; a closed window is discarded, never revived.
    pub fn mark_closed(&mut self) {
        self.state = WindowState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::new("w1", ContentRef(1), "Page 1", false)
    }

    #[test]
    fn starts_in_init() {
        assert_eq!(window().state, WindowState::Init);
    }

    #[test]
    fn init_to_connecting_to_ready() {
        let mut w = window();
        w.mark_connecting();
        assert_eq!(w.state, WindowState::Connecting);
        w.mark_ready();
        assert_eq!(w.state, WindowState::Ready);
    }

    #[test]
    fn connect_without_load_notification() {
        let mut w = window();
        w.mark_ready();
        assert_eq!(w.state, WindowState::Ready);
    }

    #[test]
    fn closed_is_terminal() {
        let mut w = window();
        w.mark_closed();
        w.mark_connecting();
        assert_eq!(w.state, WindowState::Closed);
        w.mark_ready();
        assert_eq!(w.state, WindowState::Closed);
    }

    #[test]
    fn connecting_does_not_regress() {
        let mut w = window();
        w.mark_ready();
        w.mark_connecting();
        assert_eq!(w.state, WindowState::Ready);
    }
}
