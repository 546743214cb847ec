//! Error types for shoplist.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for startup failures
//!   - [`LoadError`] - Reading or decoding the initial data file
//!   - `std::io::Error` - Terminal/TUI failures
//! - [`ModelError`] - Lookup failures inside the model (unknown list or item)
//! - [`ValidationError`] - Rejected user input (blank names)
//!
//! # Recovery Strategy
//!
//! Model and validation errors are **non-fatal**: the operation is skipped,
//! the failure is logged, and the UI keeps running. Load and terminal errors
//! are fatal and propagate to `main`.

use super::identifiers::{ItemId, ListId};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The initial data file could not be loaded.
    #[error("Failed to load data: {0}")]
    Load(#[from] LoadError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading the initial data file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file does not exist at the given path.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use shoplist::model::error::LoadError;
    ///
    /// let err = LoadError::FileNotFound { path: PathBuf::from("/tmp/missing.json") };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// `-` was given but stdin is an interactive terminal.
    #[error("Expected data on stdin, but stdin is a terminal")]
    StdinIsTerminal,

    /// The file is not a valid `{shoppingLists, users}` document.
    #[error("Invalid data in {path}: {reason}")]
    Json {
        /// File (or `-` for stdin) the document came from.
        path: PathBuf,
        /// serde_json error message, including line and column.
        reason: String,
    },
}

/// Lookup failures reported by the model.
///
/// The model leaves its state untouched when returning any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No list has this id.
    #[error("List {0} not found")]
    ListNotFound(ListId),

    /// The list exists but holds no item with this id.
    #[error("Item {item} not found in list {list}")]
    ItemNotFound {
        /// List that was searched.
        list: ListId,
        /// Item that was asked for.
        item: ItemId,
    },

    /// Positional access past the end of the item vector.
    #[error("Item index {index} out of range for list {list} with {len} items")]
    ItemIndexOutOfRange {
        /// List that was indexed.
        list: ListId,
        /// Requested position.
        index: usize,
        /// Number of items in the list.
        len: usize,
    },
}

/// User input rejected before it reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// List name blank after trimming.
    #[error("A list needs a name")]
    EmptyListName,

    /// Item name blank after trimming.
    #[error("An item needs a name")]
    EmptyItemName,

    /// Share target blank after trimming.
    #[error("Enter a name to share the list with")]
    EmptyParticipant,

    /// Category name blank after trimming.
    #[error("A category needs a name")]
    EmptyCategory,
}
