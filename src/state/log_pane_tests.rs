//! Tests for log pane state.

use super::{LogPaneEntry, LogPaneState, DEFAULT_LOG_CAPACITY};
use tracing::Level;

fn entry(level: Level, message: &str) -> LogPaneEntry {
    LogPaneEntry::now(level, message)
}

fn messages(state: &LogPaneState) -> Vec<&str> {
    state.entries().iter().map(|e| e.message.as_str()).collect()
}

#[test]
fn new_state_is_hidden_and_empty() {
    let state = LogPaneState::default();

    assert!(state.entries().is_empty());
    assert!(!state.is_visible());
    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.unread_max_level(), None);
    assert!(state.entries().capacity() >= DEFAULT_LOG_CAPACITY);
}

#[test]
fn push_keeps_chronological_order() {
    let mut state = LogPaneState::new(10);
    state.push(entry(Level::INFO, "Created list \"Party\""));
    state.record(Level::WARN, "A list needs a name");

    assert_eq!(
        messages(&state),
        vec!["Created list \"Party\"", "A list needs a name"]
    );
}

#[test]
fn push_evicts_oldest_when_at_capacity() {
    let mut state = LogPaneState::new(2);
    state.record(Level::INFO, "first");
    state.record(Level::INFO, "second");
    state.record(Level::INFO, "third");

    assert_eq!(messages(&state), vec!["second", "third"]);
}

#[test]
fn hidden_pane_counts_unread_with_highest_severity() {
    let mut state = LogPaneState::new(10);
    state.record(Level::INFO, "Item checked");
    state.record(Level::WARN, "List 9 not found");
    state.record(Level::INFO, "Item unchecked");

    assert_eq!(state.unread_count(), 3);
    assert_eq!(state.unread_max_level(), Some(Level::WARN));
}

#[test]
fn error_outranks_warn() {
    let mut state = LogPaneState::new(10);
    state.record(Level::WARN, "warn");
    state.record(Level::ERROR, "error");
    state.record(Level::DEBUG, "debug");

    assert_eq!(state.unread_max_level(), Some(Level::ERROR));
}

#[test]
fn opening_marks_everything_read() {
    let mut state = LogPaneState::new(10);
    state.record(Level::WARN, "x");
    state.toggle_visible();

    assert!(state.is_visible());
    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.unread_max_level(), None);
}

#[test]
fn visible_pane_does_not_count_unread() {
    let mut state = LogPaneState::new(10);
    state.toggle_visible();
    state.record(Level::ERROR, "seen right away");

    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.entries().len(), 1);
}

#[test]
fn unread_accumulates_again_after_closing() {
    let mut state = LogPaneState::new(10);
    state.toggle_visible();
    state.toggle_visible();
    state.record(Level::INFO, "later");

    assert_eq!(state.unread_count(), 1);
}

#[test]
fn capacity_zero_stores_nothing_but_counts() {
    let mut state = LogPaneState::new(0);
    state.record(Level::INFO, "dropped");

    assert!(state.entries().is_empty());
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn recent_returns_newest_first() {
    let mut state = LogPaneState::new(10);
    for n in 1..=4 {
        state.record(Level::INFO, format!("m{n}"));
    }
    let recent: Vec<_> = state.recent(2).map(|e| e.message.as_str()).collect();
    assert_eq!(recent, vec!["m4", "m3"]);
}
