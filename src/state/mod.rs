//! UI state machine (pure).
//!
//! Projections of the model plus everything the user is currently looking
//! at. All transitions are testable without a terminal.

pub mod app_state;
pub mod board;
pub mod detail;
pub mod dialog;
pub mod item_form;
pub mod log_pane;
pub mod snapshot;
pub mod text_input;

// Re-export for convenience
pub use app_state::{AppState, StatusMessage};
pub use board::{BoardPane, BoardProjection, ListSummary};
pub use detail::{
    DetailProjection, DetailRow, DetailViewState, ItemFilter, ItemRow, SortOrder,
    NO_COMPLETED_ITEMS, NO_OPEN_ITEMS,
};
pub use dialog::{confirm_answer, handle_prompt_key, Dialog, PromptKind, PromptOutcome, PromptState};
pub use item_form::{CategoryChoice, FormField, FormMode, FormOutcome, ItemFormState};
pub use log_pane::{LogPaneEntry, LogPaneState, DEFAULT_LOG_CAPACITY};
pub use snapshot::ListSnapshot;
pub use text_input::TextInput;
