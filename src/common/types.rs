use serde::{Deserialize, Serialize};

/// Tham số của lời gọi `Chat.Submit`.
///
/// No field is validated: empty strings are formatted and appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub sender: String,
    pub text: String,
}

impl SubmitRequest {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// The transcript line this submission produces: `"<sender>: <text>"`.
    pub fn format_line(&self) -> String {
        format!("{}: {}", self.sender, self.text)
    }
}

/// Copy of the transcript at the time of the call, oldest line first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    pub lines: Vec<String>,
}

impl TranscriptSnapshot {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}
