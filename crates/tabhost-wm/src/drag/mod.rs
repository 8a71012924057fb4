//! Live drag-based tab reordering.
//!
//! A pointer gesture runs through three stages: an arm debounce that keeps
//! plain clicks out of reorder handling, an active drag that follows the
//! pointer and animates displaced siblings, and a drain that lets animations
//! finish after the index commit. The registry commit happens on release,
//! before the visuals settle.

mod animation;
mod controller;
mod layout;

pub use animation::Anim;
pub use controller::DragReorderController;
pub use layout::{insertion_index, ContainerLayout, TabSlot};

/// Rendering-side collaborator of the drag controller.
///
/// The controller owns gesture state and animation values; everything that
/// touches actual elements goes through this boundary.
pub trait DragSurface {
    /// Sample the container and per-tab layout metrics, in positional order.
    fn sample_layout(&self) -> ContainerLayout;

    /// A drag started: lift the tab at `index` out of static flow and append
    /// the end placeholder that keeps the container's extent.
    fn lift(&mut self, index: usize);

    /// Render the dragged tab at an absolute offset.
    fn render_dragged(&mut self, offset: f64);

    /// Render a displaced sibling (identified by its pre-drag index) at a
    /// relative offset.
    fn render_sibling(&mut self, index: usize, offset: f64);

    /// Animations drained: restore static layout, drop the placeholder, and
    /// reparent the dragged tab from `from` into slot `to`.
    fn settle(&mut self, from: usize, to: usize);

    /// The gesture never armed; hand it back as a plain click on `index`.
    fn click(&mut self, index: usize);

    /// Commit the reorder. Invoked at most once per session, on release, and
    /// only when the index actually changed. This is the single path into
    /// the registry's move.
    fn on_end(&mut self, from: usize, to: usize);
}
