pub mod bridge;
pub mod channel;
pub mod client;
pub mod config;
pub mod message;

pub use bridge::{Bridge, Handler};
pub use channel::{channel_pair, ChannelPair, ContentRef, MessageSender};
pub use client::RpcClient;
pub use config::RpcConfig;
pub use message::{Command, Response, PROTOCOL_TYPE};
