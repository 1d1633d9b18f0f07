use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::time::{Duration, sleep};

use crate::error::Result;
use crate::service::ChatService;

use super::session::serve_connection;

/// Pause after a failed accept so a persistent error (e.g. out of file
/// descriptors) does not spin the loop.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

pub struct ChatServer {
    listener: TcpListener,
    service: Arc<ChatService>,
}

impl ChatServer {
    pub async fn bind(addr: impl ToSocketAddrs, service: Arc<ChatService>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, service })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, one task per connection, all sharing the
    /// same `ChatService`. Accept errors are logged and never stop the loop.
    pub async fn run(self) {
        if let Ok(addr) = self.listener.local_addr() {
            log::info!("Chat server running on {addr}...");
        }

        loop {
            match self.listener.accept().await {
                Ok((stream, peer_addr)) => {
                    tokio::spawn(serve_connection(
                        stream,
                        peer_addr,
                        Arc::clone(&self.service),
                    ));
                }
                Err(err) => {
                    log::warn!("Accept error: {err}");
                    sleep(ACCEPT_RETRY_DELAY).await;
                }
            }
        }
    }
}
