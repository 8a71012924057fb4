pub mod config;
pub mod drag;
pub mod manager;
pub mod registry;
pub mod surface;
pub mod window;

pub use config::DragConfig;
pub use drag::{DragReorderController, DragSurface};
pub use manager::{bridge, handler_table, OpenWindowOpts, WindowManager};
pub use registry::WindowRegistry;
pub use surface::{NoopSurface, Surface};
pub use window::{Window, WindowState};
