//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// The same action may mean different things on the board and in an open
/// list (e.g. `Delete` removes a list or an item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Move selection up. Default: k/↑
    SelectPrev,
    /// Move selection down. Default: j/↓
    SelectNext,
    /// Jump to first entry. Default: Home
    SelectFirst,
    /// Jump to last entry. Default: End
    SelectLast,
    /// Switch between the active and completed list panes. Default: Tab
    CycleFocus,
    /// Open the selected list. Default: Enter
    Open,
    /// Close the open list, dialog or overlay. Default: Esc
    Close,

    // Lists
    /// Create a new list. Default: n
    NewList,
    /// Rename the selected or open list. Default: r
    Rename,
    /// Delete the selected list or item (asks first). Default: d/Delete
    Delete,
    /// Mark the list completed, checking every item. Default: c
    MarkComplete,
    /// Reopen a completed list, unchecking every item. Default: o
    Reopen,
    /// Share the list with a participant. Default: s
    Share,

    // Items
    /// Add an item to the open list. Default: a
    AddItem,
    /// Edit the selected item. Default: e
    EditItem,
    /// Check/uncheck the selected item. Default: Space
    ToggleItem,
    /// Toggle grouping items by category. Default: f
    ToggleCategoryFilter,
    /// Cycle sort order: model order → A-Z → Z-A. Default: S/Shift+s
    CycleSort,
    /// Add a category to the catalog. Default: g
    AddCategory,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Toggle the log pane. Default: L/Shift+l
    ToggleLogPane,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
