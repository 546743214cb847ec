//! Board widget: active and completed lists side by side.

use super::styles::Palette;
use crate::state::{BoardPane, BoardProjection, ListSummary};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Placeholder shown in an empty pane.
pub const NO_LISTS: &str = "No lists";

/// Active and completed panes side by side.
pub struct BoardView<'a> {
    board: &'a BoardProjection,
    focus: BoardPane,
    /// Selected row per pane (active, completed).
    selected: (usize, usize),
    palette: &'a Palette,
}

impl<'a> BoardView<'a> {
    /// `selected` holds the row per pane, (active, completed).
    pub fn new(
        board: &'a BoardProjection,
        focus: BoardPane,
        selected: (usize, usize),
        palette: &'a Palette,
    ) -> Self {
        Self {
            board,
            focus,
            selected,
            palette,
        }
    }

    fn render_pane(&self, pane: BoardPane, selected: usize, area: Rect, buf: &mut Buffer) {
        let lists = self.board.pane(pane);
        let focused = self.focus == pane;
        let block = Block::default()
            .title(format!(" {} ({}) ", pane.title(), lists.len()))
            .borders(Borders::ALL)
            .border_style(self.palette.border(focused));

        if lists.is_empty() {
            Paragraph::new(Line::from(Span::styled(NO_LISTS, self.palette.muted)))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = lists
            .iter()
            .map(|summary| ListItem::new(self.summary_line(summary)))
            .collect();
        let mut list = List::new(items).block(block);
        if focused {
            list = list.highlight_style(self.palette.selected);
        }
        let mut state = ListState::default().with_selected(Some(selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn summary_line(&self, summary: &ListSummary) -> Line<'static> {
        let mut spans = vec![
            Span::raw(summary.name.clone()),
            Span::raw("  "),
            Span::styled(summary.progress(), self.palette.muted),
        ];
        if !summary.participants.is_empty() {
            spans.push(Span::styled(
                format!("  shared with {}", summary.participants.join(", ")),
                self.palette.muted,
            ));
        }
        Line::from(spans)
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_pane(BoardPane::Active, self.selected.0, panes[0], buf);
        self.render_pane(BoardPane::Completed, self.selected.1, panes[1], buf);
    }
}
