//! Initial data sources.
//!
//! The data file is a JSON document `{"shoppingLists": [...], "users": [...]}`
//! read once before the event loop starts. `-` reads the same document from
//! piped stdin.

use crate::model::error::LoadError;
use crate::model::InitialData;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Placeholder path used in errors for stdin input.
const STDIN_LABEL: &str = "<stdin>";

/// Where the initial data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Read a JSON file.
    File(PathBuf),
    /// Read piped JSON from stdin (`-` on the command line).
    Stdin,
    /// No data file configured; start with no lists.
    Empty,
}

impl DataSource {
    /// Load and decode the initial data.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::FileNotFound` for a missing file,
    /// `LoadError::StdinIsTerminal` when `-` is given without piped input,
    /// `LoadError::Io` for read failures and `LoadError::Json` for documents
    /// that do not decode.
    pub fn load(&self) -> Result<InitialData, LoadError> {
        match self {
            DataSource::Empty => Ok(InitialData::default()),
            DataSource::File(path) => load_file(path),
            DataSource::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(LoadError::StdinIsTerminal);
                }
                read_initial_data(stdin.lock(), Path::new(STDIN_LABEL))
            }
        }
    }
}

/// Pick the source for an optional data path. `-` means stdin.
pub fn detect_data_source(path: Option<PathBuf>) -> DataSource {
    match path {
        None => DataSource::Empty,
        Some(path) if path.as_os_str() == "-" => DataSource::Stdin,
        Some(path) => DataSource::File(path),
    }
}

/// Read and decode a data file.
pub fn load_file(path: &Path) -> Result<InitialData, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_initial_data(file, path)
}

/// Decode a data document from any reader. `origin` names it in errors.
pub fn read_initial_data<R: Read>(mut reader: R, origin: &Path) -> Result<InitialData, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    parse_initial_data(&text, origin)
}

/// Decode a data document. Blank input is an empty data set.
pub fn parse_initial_data(text: &str, origin: &Path) -> Result<InitialData, LoadError> {
    if text.trim().is_empty() {
        return Ok(InitialData::default());
    }
    let data: InitialData = serde_json::from_str(text).map_err(|e| LoadError::Json {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(
        origin = %origin.display(),
        lists = data.shopping_lists.len(),
        users = data.users.len(),
        "Read data file"
    );
    Ok(data)
}
