//! Board projection: all lists split into active and completed.
//!
//! Recomputed from the full list collection on every model update.

use crate::model::{ListId, ShoppingList};
use std::fmt::Write as _;

/// Which half of the board has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardPane {
    /// Lists still being shopped.
    #[default]
    Active,
    /// Finished lists.
    Completed,
}

impl BoardPane {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            BoardPane::Active => BoardPane::Completed,
            BoardPane::Completed => BoardPane::Active,
        }
    }

    /// Pane title.
    pub fn title(self) -> &'static str {
        match self {
            BoardPane::Active => "Active lists",
            BoardPane::Completed => "Completed lists",
        }
    }
}

/// One row on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    /// List id.
    pub id: ListId,
    /// List name.
    pub name: String,
    /// Checked items.
    pub done: usize,
    /// All items.
    pub total: usize,
    /// Names the list is shared with.
    pub participants: Vec<String>,
}

impl ListSummary {
    fn from_list(list: &ShoppingList) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            done: list.completed_count(),
            total: list.items.len(),
            participants: list.participants.clone(),
        }
    }

    /// `done/total`, e.g. `2/5`.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.done, self.total)
    }
}

/// Lists partitioned by completion, each half in model order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardProjection {
    active: Vec<ListSummary>,
    completed: Vec<ListSummary>,
}

impl BoardProjection {
    /// Split lists by their completed flag, keeping model order.
    pub fn project(lists: &[ShoppingList]) -> Self {
        let (completed, active): (Vec<_>, Vec<_>) = lists.iter().partition(|list| list.completed);
        Self {
            active: active.into_iter().map(ListSummary::from_list).collect(),
            completed: completed.into_iter().map(ListSummary::from_list).collect(),
        }
    }

    /// Rows of one pane.
    pub fn pane(&self, pane: BoardPane) -> &[ListSummary] {
        match pane {
            BoardPane::Active => &self.active,
            BoardPane::Completed => &self.completed,
        }
    }

    /// Rows of the active pane.
    pub fn active(&self) -> &[ListSummary] {
        &self.active
    }

    /// Rows of the completed pane.
    pub fn completed(&self) -> &[ListSummary] {
        &self.completed
    }

    /// Where a list currently sits on the board.
    pub fn locate(&self, id: ListId) -> Option<(BoardPane, usize)> {
        [BoardPane::Active, BoardPane::Completed]
            .into_iter()
            .find_map(|pane| {
                self.pane(pane)
                    .iter()
                    .position(|summary| summary.id == id)
                    .map(|index| (pane, index))
            })
    }

    /// Plain-text rendering used by `--print`.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for pane in [BoardPane::Active, BoardPane::Completed] {
            let rows = self.pane(pane);
            let _ = writeln!(out, "{} ({})", pane.title(), rows.len());
            if rows.is_empty() {
                out.push_str("  (none)\n");
            }
            for row in rows {
                let _ = write!(out, "  #{} {}  {}", row.id, row.name, row.progress());
                if !row.participants.is_empty() {
                    let _ = write!(out, "  shared with {}", row.participants.join(", "));
                }
                out.push('\n');
            }
        }
        out
    }
}
