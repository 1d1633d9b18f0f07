//! Error types for the chat relay

use thiserror::Error;
use tokio_util::codec::AnyDelimiterCodecError;

/// Transport and protocol failures. The Submit/Fetch operations themselves
/// never fail; everything here comes from the connection or the wire format.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("framing error: {0}")]
    Framing(#[from] AnyDelimiterCodecError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("connection closed by peer")]
    ConnectionClosed,

    #[error("remote call failed: {0}")]
    Remote(String),

    #[error("reply id {got} does not match request id {expected}")]
    MismatchedReply { expected: u64, got: u64 },

    #[error("reply {0} carried neither a result nor an error")]
    EmptyReply(u64),
}

pub type Result<T> = std::result::Result<T, ChatError>;
