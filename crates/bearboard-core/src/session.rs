//! Per-process session: the validated key and the query history.
//!
//! Nothing here is persisted; closing the app ends the session.

use chrono::{DateTime, Local};

/// One submitted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub query: String,
    pub at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>) -> Self {
        Self::at(query, Local::now())
    }

    pub fn at(query: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            query: query.into(),
            at,
        }
    }

    /// `HH:MM` label shown next to the entry.
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    api_key: Option<String>,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Store a key that the validation endpoint accepted.
    pub fn sign_in(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        tracing::info!("Session signed in");
        self.api_key = Some(key);
    }

    /// Forget the key and the history.
    pub fn sign_out(&mut self) {
        tracing::info!(queries = self.history.len(), "Session signed out");
        self.api_key = None;
        self.history.clear();
    }

    pub fn record(&mut self, query: impl Into<String>) {
        self.history.push(HistoryEntry::new(query));
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
