//! Core types and constructors for WindowManager.

use tabhost_common::IdGen;

use crate::registry::WindowRegistry;
use crate::surface::Surface;

/// Orchestrates the ordered window collection, the single focus pointer, and
/// window lifecycle. The RPC bridge reaches it through the handler table in
/// [`super::handler_table`].
pub struct WindowManager {
    pub(super) registry: WindowRegistry,
    /// Id of the focused window; always references a live entry or is unset.
    pub(super) active: Option<String>,
    /// Generator for window ids when the caller does not supply one.
    pub(super) ids: IdGen,
    pub(super) surface: Box<dyn Surface>,
}

/// Options for [`WindowManager::open_window`].
#[derive(Debug, Default, Clone)]
pub struct OpenWindowOpts {
    /// Explicit window id; a sequential one is generated when unset.
    pub id: Option<String>,
    /// Tab title; defaults to the id.
    pub title: Option<String>,
    /// Fixed windows cannot be closed.
    pub fixed: bool,
    /// Open without taking focus.
    pub in_background: bool,
}

impl WindowManager {
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self {
            registry: WindowRegistry::new(),
            active: None,
            ids: IdGen::new("w"),
            surface,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// The focused window's id, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
