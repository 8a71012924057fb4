pub mod errors;
pub mod id;
pub mod util;

pub use errors::{ChannelError, ConfigError, RpcError, WindowError};
pub use id::IdGen;
pub use util::clamp;
