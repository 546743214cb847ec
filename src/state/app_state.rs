//! Application state and transitions.
//!
//! AppState is the root of all UI state. It holds the latest list snapshot
//! and everything the user is looking at: focus, selections, the open list,
//! the current dialog, overlays and the status line. No I/O happens here.

use super::board::{BoardPane, BoardProjection, ListSummary};
use super::detail::{DetailProjection, DetailViewState, ItemRow, SortOrder};
use super::dialog::Dialog;
use super::log_pane::LogPaneState;
use crate::model::{ListId, ShoppingList};
use tracing::Level;

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;

/// One-line feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity; picks the style.
    pub level: Level,
    /// Message text.
    pub text: String,
}

/// Root UI state.
///
/// # State Machine
///
/// - **Screen**: board, or the detail modal of one list (`detail`)
/// - **Focus**: active ⇄ completed pane on the board
/// - **Dialog**: none, prompt, confirmation or item form, on top of either screen
/// - **Overlays**: help and log pane, toggled independently
#[derive(Debug)]
pub struct AppState {
    lists: Vec<ShoppingList>,
    board: BoardProjection,

    /// Board pane with keyboard focus.
    pub focus: BoardPane,
    /// Selected row per board pane.
    active_selected: usize,
    completed_selected: usize,

    /// The open list, if any.
    pub detail: Option<DetailViewState>,
    /// Dialog on top of the screen.
    pub dialog: Dialog,
    /// Help overlay shown.
    pub help_visible: bool,
    /// Buffered log entries and pane visibility.
    pub log_pane: LogPaneState,
    /// Feedback from the last command, until the next key.
    pub status: Option<StatusMessage>,

    /// Sort order a freshly opened list starts with.
    pub default_sort: SortOrder,
}

impl AppState {
    /// Empty state. Lists arrive through [`AppState::set_lists`].
    pub fn new(default_sort: SortOrder, log_capacity: usize) -> Self {
        Self {
            lists: Vec::new(),
            board: BoardProjection::default(),
            focus: BoardPane::Active,
            active_selected: 0,
            completed_selected: 0,
            detail: None,
            dialog: Dialog::None,
            help_visible: false,
            log_pane: LogPaneState::new(log_capacity),
            status: None,
            default_sort,
        }
    }

    // ===== Snapshot =====

    /// Replace the list snapshot and re-project.
    ///
    /// Selections are clamped to the new row counts. An open list that no
    /// longer exists is closed.
    pub fn set_lists(&mut self, lists: Vec<ShoppingList>) {
        self.board = BoardProjection::project(&lists);
        self.lists = lists;
        self.active_selected = clamp(self.active_selected, self.board.active().len());
        self.completed_selected = clamp(self.completed_selected, self.board.completed().len());

        if let Some(detail) = self.detail {
            match self.list(detail.list_id) {
                None => self.detail = None,
                Some(list) => {
                    let rows = detail.project(list).selectable().len();
                    if let Some(detail) = self.detail.as_mut() {
                        detail.selected = clamp(detail.selected, rows);
                    }
                }
            }
        }
    }

    /// Latest lists from the model.
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// List by id.
    pub fn list(&self, id: ListId) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Board projection of [`AppState::lists`].
    pub fn board(&self) -> &BoardProjection {
        &self.board
    }

    // ===== Board selection =====

    /// Selected row in a pane, clamped to its length.
    pub fn selected_index(&self, pane: BoardPane) -> usize {
        match pane {
            BoardPane::Active => self.active_selected,
            BoardPane::Completed => self.completed_selected,
        }
    }

    fn selected_index_mut(&mut self, pane: BoardPane) -> &mut usize {
        match pane {
            BoardPane::Active => &mut self.active_selected,
            BoardPane::Completed => &mut self.completed_selected,
        }
    }

    /// The highlighted board row in the focused pane.
    pub fn selected_summary(&self) -> Option<&ListSummary> {
        self.board
            .pane(self.focus)
            .get(self.selected_index(self.focus))
    }

    /// The list actions apply to: the open list, else the board selection.
    pub fn target_list(&self) -> Option<ListId> {
        self.detail
            .map(|detail| detail.list_id)
            .or_else(|| self.selected_summary().map(|summary| summary.id))
    }

    /// Switch focus to the other pane.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Focus and select a list wherever it sits on the board.
    pub fn select_list(&mut self, id: ListId) {
        if let Some((pane, index)) = self.board.locate(id) {
            self.focus = pane;
            *self.selected_index_mut(pane) = index;
        }
    }

    // ===== Movement =====

    /// Move the selection by `delta` rows in the detail view if a list is
    /// open, otherwise in the focused board pane. Saturates at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.selection_len();
        if let Some(detail) = self.detail.as_mut() {
            detail.selected = offset(detail.selected, delta, len);
        } else {
            let focus = self.focus;
            let index = self.selected_index_mut(focus);
            *index = offset(*index, delta, len);
        }
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.move_selection(isize::MIN);
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.move_selection(isize::MAX);
    }

    fn selection_len(&self) -> usize {
        match self.detail_projection() {
            Some(projection) => projection.selectable().len(),
            None => self.board.pane(self.focus).len(),
        }
    }

    // ===== Detail =====

    /// Open the selected board list. Returns whether a list was opened.
    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.selected_summary().map(|summary| summary.id) else {
            return false;
        };
        self.detail = Some(DetailViewState::new(id, self.default_sort));
        true
    }

    /// Back to the board.
    pub fn close_detail(&mut self) {
        if let Some(detail) = self.detail.take() {
            self.select_list(detail.list_id);
        }
    }

    /// Projection of the open list.
    pub fn detail_projection(&self) -> Option<DetailProjection> {
        let detail = self.detail?;
        self.list(detail.list_id).map(|list| detail.project(list))
    }

    /// The highlighted item row of the open list.
    pub fn selected_item(&self) -> Option<ItemRow> {
        let detail = self.detail?;
        let projection = self.detail_projection()?;
        projection
            .selectable()
            .get(detail.selected)
            .map(|row| (*row).clone())
    }

    /// Switch between flat and grouped items.
    pub fn toggle_category_filter(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.filter = detail.filter.toggle();
            detail.selected = 0;
        }
    }

    /// Next sort order for the open list.
    pub fn cycle_sort(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.sort = detail.sort.cycle();
            detail.selected = 0;
        }
    }

    // ===== Feedback =====

    /// Show a one-line status message. The log pane is fed separately from
    /// tracing events.
    pub fn report(&mut self, level: Level, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level,
            text: text.into(),
        });
    }

    /// Drop the status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

fn clamp(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn offset(index: usize, delta: isize, len: usize) -> usize {
    let moved = if delta.is_negative() {
        index.saturating_sub(delta.unsigned_abs())
    } else {
        index.saturating_add(delta.unsigned_abs())
    };
    clamp(moved, len)
}
