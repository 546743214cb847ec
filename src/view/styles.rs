//! Colors and text styles for the board, detail view and overlays.

use ratatui::style::{Color, Modifier, Style};
use tracing::Level;

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Resolved by the config layer from `--no-color`, `NO_COLOR` and the
/// config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// `enabled = false` renders with modifiers only.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== Palette =====

/// Styles used across the view.
///
/// Without colors every style falls back to modifiers only, so the
/// selection and focus stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Border of the focused pane or dialog.
    pub focused_border: Style,
    /// Border of other panes.
    pub unfocused_border: Style,
    /// Highlighted row.
    pub selected: Style,
    /// Section and group headers.
    pub header: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Checked items.
    pub done: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Validation errors.
    pub error: Style,
    colors: bool,
}

impl Palette {
    /// Palette for the given color setting.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Yellow),
                unfocused_border: Style::default().fg(Color::White),
                selected: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                done: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                colors: true,
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                header: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default().add_modifier(Modifier::DIM),
                done: Style::default().add_modifier(Modifier::CROSSED_OUT),
                key: Style::default().add_modifier(Modifier::BOLD),
                error: Style::default().add_modifier(Modifier::BOLD),
                colors: false,
            }
        }
    }

    /// Border style for a pane.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }

    /// Color-coded style for a log level.
    ///
    /// - ERROR: Red
    /// - WARN: Yellow
    /// - INFO: Cyan
    /// - DEBUG: DarkGray
    /// - TRACE: DarkGray, dimmed
    pub fn level(&self, level: Level) -> Style {
        if !self.colors {
            return match level {
                Level::ERROR | Level::WARN => Style::default().add_modifier(Modifier::BOLD),
                Level::INFO => Style::default(),
                _ => Style::default().add_modifier(Modifier::DIM),
            };
        }
        match level {
            Level::ERROR => Style::default().fg(Color::Red),
            Level::WARN => Style::default().fg(Color::Yellow),
            Level::INFO => Style::default().fg(Color::Cyan),
            Level::DEBUG => Style::default().fg(Color::DarkGray),
            _ => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}
