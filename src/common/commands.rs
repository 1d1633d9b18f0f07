use serde::{Deserialize, Serialize};

use super::types::SubmitRequest;

/// Tên phương thức theo dạng `"<Service>.<Op>"`; service phía server là `Chat`.
pub const SUBMIT_METHOD: &str = "Chat.Submit";
pub const FETCH_METHOD: &str = "Chat.Fetch";

/// One remote call as it travels over the wire.
///
/// `method` is `"<Service>.<Op>"`; `params` is left as raw JSON so the server
/// can answer an unknown method or bad params with an error reply instead of
/// dropping the connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub id: u64,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl CallRequest {
    pub fn submit(id: u64, request: &SubmitRequest) -> serde_json::Result<Self> {
        Ok(Self {
            id,
            method: SUBMIT_METHOD.to_string(),
            params: serde_json::to_value(request)?,
        })
    }

    pub fn fetch(id: u64) -> Self {
        Self {
            id,
            method: FETCH_METHOD.to_string(),
            params: serde_json::Value::Null,
        }
    }
}
