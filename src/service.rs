use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::common::{SubmitRequest, TranscriptSnapshot};
use crate::storage::Transcript;

/// Owns the shared transcript. Every read and write goes through one
/// exclusive lock, so each Submit appends and snapshots atomically with
/// respect to every other call.
#[derive(Debug, Default)]
pub struct ChatService {
    transcript: Mutex<Transcript>,
}

impl ChatService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"<sender>: <text>"` and return the transcript as it stands
    /// right after the append. The new line is always the last one in the reply.
    pub fn submit(&self, request: &SubmitRequest) -> TranscriptSnapshot {
        let mut transcript = self.lock();
        let len = transcript.append(request.format_line());
        log::info!(
            "Received message from {}: '{}'. History now has {} messages.",
            request.sender,
            request.text,
            len
        );
        transcript.snapshot()
    }

    /// Copy of the transcript; never mutates it.
    pub fn fetch(&self) -> TranscriptSnapshot {
        self.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The transcript is append-only, so a panic in another holder cannot
    // leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Transcript> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
