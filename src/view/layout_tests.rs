//! Tests for the screen layout.

use super::*;
use crate::model::{ItemDraft, ItemId, ListId, ShoppingList};
use crate::state::{Dialog, PromptKind, PromptState, SortOrder};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tracing::Level;

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn draw(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let palette = Palette::default();
    terminal
        .draw(|frame| render_layout(frame, state, &palette))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn sample_state() -> AppState {
    let mut list = ShoppingList::new(ListId::new(1), "Wocheneinkauf", None);
    list.add_item(ItemDraft::named("Hafermilch").into_item(ItemId::new(1)));
    let mut state = AppState::new(SortOrder::Default, 20);
    state.set_lists(vec![list]);
    state
}

#[test]
fn centered_rect_is_centered() {
    let area = Rect::new(0, 0, 100, 50);
    assert_eq!(centered_rect(50, 50, area), Rect::new(25, 12, 50, 25));
}

#[test]
fn centered_rect_handles_wide_terminals() {
    let area = Rect::new(0, 0, 1000, 40);
    assert_eq!(centered_rect(80, 100, area).width, 800);
}

#[test]
fn centered_fixed_clamps_height() {
    let area = Rect::new(0, 0, 80, 4);
    let popup = centered_fixed(60, 10, area);
    assert_eq!(popup.height, 4);
    assert_eq!(popup.width, 48);
}

#[test]
fn board_and_status_hints_render() {
    let text = draw(&sample_state());
    assert!(text.contains("Active lists (1)"), "got:\n{text}");
    assert!(text.contains("Wocheneinkauf"));
    assert!(text.contains("? help"));
}

#[test]
fn status_message_replaces_hints() {
    let mut state = sample_state();
    state.report(Level::WARN, "A list needs a name");
    let text = draw(&state);
    assert!(text.contains("A list needs a name"));
    assert!(!text.contains("? help"));
}

#[test]
fn open_list_renders_detail_modal() {
    let mut state = sample_state();
    state.open_selected();
    let text = draw(&state);
    assert!(text.contains("Wocheneinkauf [all, list order]"), "got:\n{text}");
    assert!(text.contains("[ ] Hafermilch"));
}

#[test]
fn hidden_log_pane_shows_unread_badge() {
    let mut state = sample_state();
    state.log_pane.record(Level::WARN, "List 9 not found");
    let text = draw(&state);
    assert!(text.contains("[1 new log]"), "got:\n{text}");

    state.log_pane.toggle_visible();
    let text = draw(&state);
    assert!(text.contains("List 9 not found"));
    assert!(!text.contains("new log]"));
}

#[test]
fn dialog_draws_over_board() {
    let mut state = sample_state();
    state.dialog = Dialog::Prompt(PromptState::new(PromptKind::NewList));
    let text = draw(&state);
    assert!(text.contains("New list"));
    assert!(text.contains("List name:"));
}

#[test]
fn help_overlay_draws_on_top() {
    let mut state = sample_state();
    state.help_visible = true;
    let text = draw(&state);
    assert!(text.contains("Keyboard Shortcuts"));
}
