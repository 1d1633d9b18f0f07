use std::net::SocketAddr;
use std::sync::Arc;

use futures::StreamExt;
use tokio::net::TcpStream;
use uuid::Uuid;

use crate::common::{CallReply, CallRequest, FETCH_METHOD, SUBMIT_METHOD, SubmitRequest};
use crate::error::Result;
use crate::service::ChatService;

use super::transport::{CallTransport, build_transport, send_json};

/// Serves every call arriving on one connection until the client disconnects.
pub async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, service: Arc<ChatService>) {
    let session_id = Uuid::new_v4();
    log::info!("Client connected: {peer_addr} (session {session_id})");

    let result = match build_transport(stream) {
        Ok(mut transport) => serve_calls(&mut transport, &service, session_id).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => log::info!("Client disconnected: {peer_addr} (session {session_id})"),
        Err(err) => log::warn!("Session {session_id} with {peer_addr} ended: {err}"),
    }
}

async fn serve_calls(
    transport: &mut CallTransport,
    service: &ChatService,
    session_id: Uuid,
) -> Result<()> {
    // Calls on one connection are answered strictly in order.
    while let Some(frame) = transport.next().await {
        let reply = handle_line(service, &frame?);
        if let Some(error) = &reply.error {
            log::warn!("Session {session_id}: call {} rejected: {error}", reply.id);
        }
        send_json(transport, &reply).await?;
    }
    Ok(())
}

/// Decode one request line and run it. A line that is not a request at all,
/// including one that is not valid UTF-8, is answered with id 0.
pub fn handle_line(service: &ChatService, line: &[u8]) -> CallReply {
    match serde_json::from_slice::<CallRequest>(line) {
        Ok(request) => handle_call(service, request),
        Err(err) => CallReply::failure(0, format!("malformed request: {err}")),
    }
}

pub fn handle_call(service: &ChatService, request: CallRequest) -> CallReply {
    match request.method.as_str() {
        SUBMIT_METHOD => match serde_json::from_value::<SubmitRequest>(request.params) {
            Ok(submit) => CallReply::success(request.id, service.submit(&submit)),
            Err(err) => CallReply::failure(
                request.id,
                format!("invalid params for {SUBMIT_METHOD}: {err}"),
            ),
        },
        FETCH_METHOD => CallReply::success(request.id, service.fetch()),
        other => CallReply::failure(request.id, format!("unknown method: {other}")),
    }
}
