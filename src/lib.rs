//! Multi-client chat relay over a line-delimited JSON RPC channel.
//!
//! A single [`ChatServer`] owns one [`ChatService`] whose transcript is shared
//! by every connection. Clients call `Chat.Submit` to append a line and get the
//! whole transcript back, or `Chat.Fetch` to read it.

pub mod common;
pub mod config;
pub mod error;
pub mod network;
pub mod service;
pub mod storage;
pub mod ui;

pub use error::{ChatError, Result};
pub use network::{CallClient, ChatServer};
pub use service::ChatService;
