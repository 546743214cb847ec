//! Log pane widget for displaying tracing events inside the app.

use super::styles::Palette;
use crate::state::LogPaneEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::collections::VecDeque;

// ===== LogPaneView Widget =====

/// Renders the newest log entries, newest at the bottom.
///
/// Each row shows:
/// - Timestamp (HH:MM:SS, local time)
/// - Color-coded level
/// - Message text
///
/// The border reads "Logs" or "Logs [N new]" for unread entries.
pub struct LogPaneView<'a> {
    /// Log entries, oldest to newest
    entries: &'a VecDeque<LogPaneEntry>,
    unread_count: usize,
    palette: &'a Palette,
}

impl<'a> LogPaneView<'a> {
    /// Widget over the pane's entries.
    pub fn new(entries: &'a VecDeque<LogPaneEntry>, unread_count: usize, palette: &'a Palette) -> Self {
        Self {
            entries,
            unread_count,
            palette,
        }
    }

    fn title(&self) -> String {
        if self.unread_count > 0 {
            format!(" Logs [{} new] ", self.unread_count)
        } else {
            " Logs ".to_string()
        }
    }
}

impl Widget for LogPaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(self.palette.unfocused_border);
        let inner_height = usize::from(area.height.saturating_sub(2));

        let skip = self.entries.len().saturating_sub(inner_height);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .skip(skip)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format_timestamp(&entry.timestamp), self.palette.muted),
                    Span::raw(" "),
                    Span::styled(
                        format!("{:<5}", entry.level.as_str()),
                        self.palette.level(entry.level),
                    ),
                    Span::raw(" "),
                    Span::raw(entry.message.clone()),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Format timestamp as HH:MM:SS in local time.
fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string()
}
