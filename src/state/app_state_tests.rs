//! Tests for AppState transitions.

use super::*;
use crate::model::{ItemDraft, ItemId};
use crate::state::detail::ItemFilter;

fn list(id: u64, name: &str, items: &[(&str, bool)]) -> ShoppingList {
    let mut list = ShoppingList::new(ListId::new(id), name, None);
    for (n, (item, done)) in items.iter().enumerate() {
        let mut item = ItemDraft::named(*item).into_item(ItemId::new(id * 10 + n as u64));
        item.completed = *done;
        list.add_item(item);
    }
    list.completed = !items.is_empty() && items.iter().all(|(_, d)| *d);
    list
}

fn state_with(lists: Vec<ShoppingList>) -> AppState {
    let mut state = AppState::new(SortOrder::Default, 50);
    state.set_lists(lists);
    state
}

fn sample() -> AppState {
    state_with(vec![
        list(1, "Wochenmarkt", &[("Zwiebel", false), ("Apfel", false), ("Brot", true)]),
        list(2, "Baumarkt", &[("Schrauben", true)]),
        list(3, "Party", &[]),
    ])
}

#[test]
fn new_state_has_nothing_open() {
    let state = AppState::new(SortOrder::Asc, 10);
    assert!(state.detail.is_none());
    assert!(!state.dialog.is_open());
    assert!(state.target_list().is_none());
    assert_eq!(state.focus, BoardPane::Active);
}

#[test]
fn selection_moves_within_focused_pane_and_saturates() {
    let mut state = sample();
    state.move_selection(1);
    assert_eq!(state.selected_summary().unwrap().name, "Party");
    state.move_selection(1);
    assert_eq!(state.selected_summary().unwrap().name, "Party");
    state.select_first();
    assert_eq!(state.selected_summary().unwrap().name, "Wochenmarkt");
}

#[test]
fn cycle_focus_switches_panes() {
    let mut state = sample();
    state.cycle_focus();
    assert_eq!(state.focus, BoardPane::Completed);
    assert_eq!(state.selected_summary().unwrap().name, "Baumarkt");
}

#[test]
fn open_selected_uses_default_sort() {
    let mut state = sample();
    state.default_sort = SortOrder::Desc;
    assert!(state.open_selected());

    let detail = state.detail.expect("detail open");
    assert_eq!(detail.list_id, ListId::new(1));
    assert_eq!(detail.sort, SortOrder::Desc);
    assert_eq!(state.target_list(), Some(ListId::new(1)));
}

#[test]
fn open_selected_on_empty_pane_does_nothing() {
    let mut state = state_with(vec![]);
    assert!(!state.open_selected());
    assert!(state.detail.is_none());
}

#[test]
fn selected_item_follows_projection_order() {
    let mut state = sample();
    state.open_selected();
    state.cycle_sort();

    let first = state.selected_item().unwrap();
    assert_eq!(first.name, "Apfel");
    assert_eq!(first.index, 1, "row keeps its index in the list");

    state.select_last();
    assert_eq!(state.selected_item().unwrap().name, "Brot");
}

#[test]
fn toggling_filter_resets_item_selection() {
    let mut state = sample();
    state.open_selected();
    state.move_selection(1);
    state.toggle_category_filter();

    let detail = state.detail.unwrap();
    assert_eq!(detail.filter, ItemFilter::ByCategory);
    assert_eq!(detail.selected, 0);
}

#[test]
fn set_lists_closes_detail_of_deleted_list() {
    let mut state = sample();
    state.open_selected();
    state.set_lists(vec![list(2, "Baumarkt", &[("Schrauben", true)])]);
    assert!(state.detail.is_none());
}

#[test]
fn set_lists_clamps_selection() {
    let mut state = sample();
    state.select_last();
    state.set_lists(vec![list(1, "Wochenmarkt", &[])]);
    assert_eq!(state.selected_index(BoardPane::Active), 0);
}

#[test]
fn close_detail_reselects_list_in_its_new_pane() {
    let mut state = sample();
    state.open_selected();
    let mut done = list(1, "Wochenmarkt", &[("Zwiebel", true)]);
    done.completed = true;
    state.set_lists(vec![done, list(3, "Party", &[])]);

    state.close_detail();
    assert_eq!(state.focus, BoardPane::Completed);
    assert_eq!(state.selected_summary().unwrap().id, ListId::new(1));
}

#[test]
fn report_sets_status() {
    let mut state = sample();
    state.report(Level::WARN, "A list needs a name");

    assert_eq!(
        state.status,
        Some(StatusMessage {
            level: Level::WARN,
            text: "A list needs a name".to_string()
        })
    );
    assert_eq!(state.log_pane.unread_count(), 0, "status does not feed the log pane");

    state.clear_status();
    assert!(state.status.is_none());
}
