use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity or flavor of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Plain narration.
    Info,
    /// Something went the player's way.
    Success,
    /// A recoverable refusal.
    Warning,
    /// A terminal condition or a rejected command.
    Error,
    /// Combat narration.
    Combat,
    /// NPC speech and dialogue options.
    Dialogue,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Combat => "combat",
            Self::Dialogue => "dialogue",
        };
        write!(f, "{s}")
    }
}

/// A single timestamped message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Kind of message.
    pub kind: LogKind,
    /// Message text.
    pub text: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
}

/// An append-only record of everything that happened in a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.entries.push(LogEntry {
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    /// Append an info message.
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(LogKind::Info, text);
    }

    /// Append a success message.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(LogKind::Success, text);
    }

    /// Append a warning.
    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(LogKind::Warning, text);
    }

    /// Append an error.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(LogKind::Error, text);
    }

    /// Append combat narration.
    pub fn combat(&mut self, text: impl Into<String>) {
        self.push(LogKind::Combat, text);
    }

    /// Append a dialogue line.
    pub fn dialogue(&mut self, text: impl Into<String>) {
        self.push(LogKind::Dialogue, text);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries recorded after the first `n`.
    pub fn since(&self, n: usize) -> &[LogEntry] {
        self.entries.get(n..).unwrap_or_default()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as plain text, one `[kind] text` line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("[{}] {}\n", entry.kind, entry.text));
        }
        out
    }
}
