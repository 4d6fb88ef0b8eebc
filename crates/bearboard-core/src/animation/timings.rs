//! Frame intervals for each animation phase.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::progress::DEFAULT_FULL_LEN;

/// Per-phase frame intervals, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Hiding sequence played in reverse when focus returns to the e-mail field.
    pub unhide_ms: u64,
    /// Hiding sequence played forward when the key field gains focus.
    pub hide_ms: u64,
    /// Peeking sequence, both directions.
    pub peek_ms: u64,
    /// Input length that maps to full watching progress.
    pub full_len: usize,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            unhide_ms: 60,
            hide_ms: 40,
            peek_ms: 50,
            full_len: DEFAULT_FULL_LEN,
        }
    }
}

impl Timings {
    pub fn unhide(&self) -> Duration {
        Duration::from_millis(self.unhide_ms)
    }

    pub fn hide(&self) -> Duration {
        Duration::from_millis(self.hide_ms)
    }

    pub fn peek(&self) -> Duration {
        Duration::from_millis(self.peek_ms)
    }
}
