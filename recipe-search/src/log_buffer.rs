use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use tracing::Level;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe circular buffer for log entries
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_entries))),
            max_entries,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.write().unwrap();
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.read().unwrap().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: chrono::Local::now(),
            level: Level::INFO,
            target: "recipe_search".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn oldest_entries_are_dropped_at_capacity() {
        let buffer = LogBuffer::new(2);
        buffer.push(entry("one"));
        buffer.push(entry("two"));
        buffer.push(entry("three"));

        let messages: Vec<_> = buffer.get_entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn clones_share_entries() {
        let buffer = LogBuffer::new(5);
        let clone = buffer.clone();
        assert!(clone.is_empty());

        buffer.push(entry("shared"));
        assert_eq!(clone.len(), 1);
    }
}
