use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::net::TcpStream;
use tokio_util::codec::{AnyDelimiterCodec, Framed};

use crate::error::{ChatError, Result};

/// Một dòng JSON cho mỗi request/reply.
///
/// Frames are raw bytes split on `\n`; UTF-8 is only checked when a frame is
/// decoded as JSON, so a garbled line cannot break the framing.
pub type CallTransport = Framed<TcpStream, AnyDelimiterCodec>;

pub fn build_transport(stream: TcpStream) -> Result<CallTransport> {
    stream.set_nodelay(true)?;
    Ok(Framed::new(
        stream,
        AnyDelimiterCodec::new(b"\n".to_vec(), b"\n".to_vec()),
    ))
}

pub async fn send_json<T: Serialize>(transport: &mut CallTransport, value: &T) -> Result<()> {
    let line = serde_json::to_string(value)?;
    transport.send(line).await?;
    Ok(())
}

/// Next decoded frame, or `ConnectionClosed` once the peer hangs up.
pub async fn recv_json<T: DeserializeOwned>(transport: &mut CallTransport) -> Result<T> {
    match transport.next().await {
        Some(frame) => Ok(serde_json::from_slice(&frame?)?),
        None => Err(ChatError::ConnectionClosed),
    }
}
