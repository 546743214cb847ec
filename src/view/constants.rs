//! Layout dimensions shared by the view widgets.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the log pane when visible, borders included.
pub const LOG_PANE_HEIGHT: u16 = 8;

/// Detail modal width as a percentage of the screen.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 80;

/// Detail modal height as a percentage of the screen.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Dialog width as a percentage of the screen.
pub const DIALOG_WIDTH_PERCENT: u16 = 60;

/// Prompt and confirmation dialog height, borders included.
pub const PROMPT_HEIGHT: u16 = 6;

/// Item form height: five fields, error line, hint line, borders.
pub const ITEM_FORM_HEIGHT: u16 = 10;

/// Help overlay width as a percentage of the screen.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Help overlay height as a percentage of the screen.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop waits for input before checking the log channel.
pub const EVENT_POLL_MILLIS: u64 = 250;
