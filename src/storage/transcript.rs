use crate::common::TranscriptSnapshot;

/// Append-only, in-memory list of formatted chat lines.
///
/// Lines are never edited or reordered once pushed, so the length only grows.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and return the new length.
    pub fn append(&mut self, line: String) -> usize {
        self.lines.push(line);
        self.lines.len()
    }

    /// Owned copy of every line, oldest first.
    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            lines: self.lines.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_reports_growing_length() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.append("a: 1".into()), 1);
        assert_eq!(transcript.append("b: 2".into()), 2);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let mut transcript = Transcript::new();
        transcript.append("a: 1".into());
        let before = transcript.snapshot();
        transcript.append("b: 2".into());

        assert_eq!(before.lines, vec!["a: 1".to_string()]);
        assert_eq!(transcript.snapshot().len(), 2);
    }
}
