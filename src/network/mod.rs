pub mod client;
pub mod server;
pub mod session;
pub mod transport;

pub use client::CallClient;
pub use server::ChatServer;
