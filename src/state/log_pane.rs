//! Log pane: the in-app view of side-channel messages.
//!
//! Rejected input, failed lookups and applied actions land here with a
//! timestamp and level. While the pane is hidden it counts unread entries
//! and remembers the most severe one for the status bar badge.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::Level;

#[cfg(test)]
#[path = "log_pane_tests.rs"]
mod tests;

/// Default number of retained entries.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// One captured log event.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPaneEntry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Event level.
    pub level: Level,
    /// Message followed by any extra fields.
    pub message: String,
}

impl LogPaneEntry {
    /// Entry stamped with the current time.
    pub fn now(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }
}

/// Bounded ring buffer with unread tracking.
#[derive(Debug)]
pub struct LogPaneState {
    /// Oldest at front.
    entries: VecDeque<LogPaneEntry>,
    capacity: usize,
    unread_count: usize,
    unread_max_level: Option<Level>,
    visible: bool,
}

impl LogPaneState {
    /// Hidden pane keeping up to `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            unread_count: 0,
            unread_max_level: None,
            visible: false,
        }
    }

    /// Append an entry, evicting the oldest at capacity.
    ///
    /// Capacity 0 keeps nothing but still counts unread entries.
    pub fn push(&mut self, entry: LogPaneEntry) {
        if !self.visible {
            self.unread_count += 1;
            self.unread_max_level = Some(match self.unread_max_level {
                None => entry.level,
                Some(existing) => more_severe(existing, entry.level),
            });
        }

        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Push a message stamped with the current time.
    pub fn record(&mut self, level: Level, message: impl Into<String>) {
        self.push(LogPaneEntry::now(level, message));
    }

    /// Show or hide the pane. Showing it marks everything read.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.unread_count = 0;
            self.unread_max_level = None;
        }
    }

    /// Whether the pane is on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Entries added while hidden.
    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Most severe unread level.
    pub fn unread_max_level(&self) -> Option<Level> {
        self.unread_max_level
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &VecDeque<LogPaneEntry> {
        &self.entries
    }

    /// Newest entries first, at most `limit`.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LogPaneEntry> {
        self.entries.iter().rev().take(limit)
    }
}

impl Default for LogPaneState {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

/// `tracing` orders more verbose levels as greater, so severity is the minimum.
fn more_severe(a: Level, b: Level) -> Level {
    a.min(b)
}
