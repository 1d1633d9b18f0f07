use serde::{Deserialize, Serialize};

use super::types::TranscriptSnapshot;

/// Reply to one `CallRequest`, carrying the same `id`.
///
/// Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallReply {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TranscriptSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CallReply {
    pub fn success(id: u64, snapshot: TranscriptSnapshot) -> Self {
        Self {
            id,
            result: Some(snapshot),
            error: None,
        }
    }

    pub fn failure(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(message.into()),
        }
    }
}
