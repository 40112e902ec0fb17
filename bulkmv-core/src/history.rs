use serde::Serialize;
use std::path::PathBuf;

/// The recorded rename actions of one committed batch, in the order they
/// were applied. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Timestamp when the batch was committed.
    pub created_at: String,
    /// Applied renames as `(old path, new path)` pairs.
    pub renames: Vec<(PathBuf, PathBuf)>,
}

impl HistoryEntry {
    pub fn new(renames: Vec<(PathBuf, PathBuf)>) -> Self {
        Self {
            created_at: chrono::Local::now().to_rfc3339(),
            renames,
        }
    }
}

/// In-memory stack of committed batches, most recent last. Lives for the
/// process lifetime only; it is touched only by commit and undo.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Pop the most recent entry, if any.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(from: &str, to: &str) -> HistoryEntry {
        HistoryEntry::new(vec![(PathBuf::from(from), PathBuf::from(to))])
    }

    #[test]
    fn test_push_pop_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push(entry("a", "b"));
        history.push(entry("c", "d"));
        assert_eq!(history.len(), 2);

        let last = history.pop().unwrap();
        assert_eq!(last.renames[0].0, PathBuf::from("c"));
        let first = history.pop().unwrap();
        assert_eq!(first.renames[0].0, PathBuf::from("a"));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_last_does_not_consume() {
        let mut history = History::new();
        history.push(entry("a", "b"));
        assert!(history.last().is_some());
        assert_eq!(history.len(), 1);
    }
}
