use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One revision of history, newest-first as returned by `svn log`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub revision: u64,
    /// Missing for revisions without an author (e.g. r0)
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// First line of the commit message, empty when there is none
    pub summary: String,
}

impl LogEntry {
    pub fn new(revision: u64) -> Self {
        Self {
            revision,
            author: None,
            date: None,
            summary: String::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Keeps only the first line of `message`
    pub fn with_message(mut self, message: &str) -> Self {
        self.summary = message.lines().next().unwrap_or("").trim_end().to_string();
        self
    }
}
