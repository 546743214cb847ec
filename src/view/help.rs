//! Help overlay listing the keyboard shortcuts.
//!
//! Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::layout::centered_rect;
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (heading, [(keys, description)]).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓  k/↑", "Move selection"),
            ("Home/End", "First / last row"),
            ("Tab", "Switch between active and completed lists"),
            ("Enter", "Open list (edit item inside a list)"),
            ("Esc", "Close list or dialog"),
        ],
    ),
    (
        "Lists",
        &[
            ("n", "New list"),
            ("r", "Rename list"),
            ("d/Del", "Delete list or item"),
            ("c", "Mark list complete"),
            ("o", "Reopen list"),
            ("s", "Share list"),
        ],
    ),
    (
        "Items",
        &[
            ("a", "Add item"),
            ("e", "Edit item"),
            ("Space", "Check / uncheck item"),
            ("f", "Group by category"),
            ("S", "Cycle sort order"),
            ("g", "New category"),
        ],
    ),
    (
        "Application",
        &[
            ("?", "Toggle help"),
            ("L", "Toggle log pane"),
            ("q/Ctrl+C", "Quit"),
        ],
    ),
];

/// Render the help overlay centered over `area`.
pub fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.header),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (n, (heading, shortcuts)) in SECTIONS.iter().enumerate() {
        if n > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*heading, palette.header)));
        for (keys, description) in *shortcuts {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), palette.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let palette = Palette::default();
        terminal
            .draw(|frame| render_help_overlay(frame, frame.area(), &palette))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn shows_title_and_dismiss_hint() {
        let text = render_to_string(100, 50);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Press Esc or ? to close"));
    }

    #[test]
    fn lists_every_section() {
        let text = render_to_string(100, 50);
        for (heading, _) in SECTIONS {
            assert!(text.contains(heading), "missing section {heading}");
        }
        assert!(text.contains("Toggle log pane"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let _ = render_to_string(20, 6);
    }
}
