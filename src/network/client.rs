use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::common::{CallReply, CallRequest, SubmitRequest, TranscriptSnapshot};
use crate::error::{ChatError, Result};

use super::transport::{CallTransport, build_transport, recv_json, send_json};

/// One connection to the chat server. Calls are issued strictly one at a
/// time: each waits for its reply before the next request is written.
pub struct CallClient {
    transport: CallTransport,
    next_id: u64,
}

impl CallClient {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self {
            transport: build_transport(stream)?,
            next_id: 1,
        })
    }

    /// `Chat.Submit`: append `"<sender>: <text>"` and get the whole transcript back.
    pub async fn submit(
        &mut self,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<TranscriptSnapshot> {
        let id = self.take_id();
        let request = CallRequest::submit(id, &SubmitRequest::new(sender, text))?;
        self.call(request).await
    }

    /// `Chat.Fetch`: read the transcript without changing it.
    pub async fn fetch(&mut self) -> Result<TranscriptSnapshot> {
        let id = self.take_id();
        self.call(CallRequest::fetch(id)).await
    }

    pub async fn close(self) -> Result<()> {
        let mut stream = self.transport.into_inner();
        stream.shutdown().await?;
        Ok(())
    }

    async fn call(&mut self, request: CallRequest) -> Result<TranscriptSnapshot> {
        send_json(&mut self.transport, &request).await?;
        let reply: CallReply = recv_json(&mut self.transport).await?;

        if reply.id != request.id {
            return Err(ChatError::MismatchedReply {
                expected: request.id,
                got: reply.id,
            });
        }
        match (reply.result, reply.error) {
            (_, Some(error)) => Err(ChatError::Remote(error)),
            (Some(snapshot), None) => Ok(snapshot),
            (None, None) => Err(ChatError::EmptyReply(reply.id)),
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
