//! Screen layout: board or detail modal, log pane, status bar, overlays.

use super::board::BoardView;
use super::constants::{
    DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT, LOG_PANE_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::detail::DetailView;
use super::dialog::render_dialog;
use super::help::render_help_overlay;
use super::log_pane::LogPaneView;
use super::styles::Palette;
use crate::state::{AppState, BoardPane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

/// Render the whole screen from the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let area = frame.area();
    let mut constraints = vec![Constraint::Min(3)];
    if state.log_pane.is_visible() {
        constraints.push(Constraint::Length(LOG_PANE_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let main_area = chunks[0];

    frame.render_widget(
        BoardView::new(
            state.board(),
            state.focus,
            (
                state.selected_index(BoardPane::Active),
                state.selected_index(BoardPane::Completed),
            ),
            palette,
        ),
        main_area,
    );

    if let (Some(detail), Some(projection)) = (state.detail, state.detail_projection()) {
        let name = state
            .list(detail.list_id)
            .map(|list| list.name.as_str())
            .unwrap_or_default();
        let popup = centered_rect(
            DETAIL_POPUP_WIDTH_PERCENT,
            DETAIL_POPUP_HEIGHT_PERCENT,
            main_area,
        );
        frame.render_widget(DetailView::new(name, detail, &projection, palette), popup);
    }

    if state.log_pane.is_visible() {
        frame.render_widget(
            LogPaneView::new(state.log_pane.entries(), state.log_pane.unread_count(), palette),
            chunks[1],
        );
    }

    render_status_bar(frame, chunks[chunks.len() - 1], state, palette);
    render_dialog(frame, main_area, &state.dialog, palette);

    if state.help_visible {
        render_help_overlay(frame, area, palette);
    }
}

/// Status message, or key hints when there is none. Unread log entries
/// show as a badge while the log pane is hidden.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = match &state.status {
        Some(status) => vec![Span::styled(
            format!(" {}", status.text),
            palette.level(status.level),
        )],
        None => vec![
            Span::styled(" ?", palette.key),
            Span::styled(" help  ", palette.muted),
            Span::styled("n", palette.key),
            Span::styled(" new list  ", palette.muted),
            Span::styled("q", palette.key),
            Span::styled(" quit", palette.muted),
        ],
    };

    let unread = state.log_pane.unread_count();
    if unread > 0 {
        let level = state
            .log_pane
            .unread_max_level()
            .unwrap_or(tracing::Level::INFO);
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("[{unread} new log]"), palette.level(level)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// A rect of the given percentage of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = percent_of(area.width, percent_x);
    let popup_height = percent_of(area.height, percent_y);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Like [`centered_rect`] but with a fixed height, clamped to `area`.
pub fn centered_fixed(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_width = percent_of(area.width, percent_x);
    let popup_height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}
