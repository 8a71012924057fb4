//! The WindowManager coordinates the registry, focus, lifecycle, and the
//! handler table exposed through the bridge.

mod focus;
mod handlers;
mod lifecycle;
mod operations;
mod types;

pub use handlers::{bridge, handler_table};
pub use types::{OpenWindowOpts, WindowManager};
