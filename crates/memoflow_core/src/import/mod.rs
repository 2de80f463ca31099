//! CSV import acknowledgement stub.
//!
//! # Responsibility
//! - Read a user-selected CSV file and report what it contains.
//!
//! # Invariants
//! - Import never materializes memos: no code path here touches the store.
//!   Actual ingestion belongs to a backend that does not exist yet.
//! - Malformed input is a recoverable, user-visible condition.

use crate::notify::Notice;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type ImportResult<T> = Result<T, ImportError>;

/// Failure while reading or inspecting an import file.
#[derive(Debug)]
pub enum ImportError {
    /// File could not be read at all.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Content is not usable as CSV (empty, no header row).
    Malformed(String),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {}", path.display(), source)
            }
            Self::Malformed(reason) => write!(f, "unusable CSV content: {reason}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Malformed(_) => None,
        }
    }
}

/// What an inspected file claims to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPreview {
    /// Data rows after the header, blank lines excluded.
    pub record_count: usize,
    /// Header names, trimmed and lowercased.
    pub headers: Vec<String>,
}

/// Inspects CSV text without parsing rows into memos.
///
/// # Errors
/// `Malformed` when the content is empty or the header row is blank.
pub fn inspect_csv_text(text: &str) -> ImportResult<CsvPreview> {
    let mut lines = text.lines();
    let header_line = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| ImportError::Malformed("missing header row".to_string()))?;

    let headers: Vec<String> = header_line
        .split(',')
        .map(|name| name.trim().to_ascii_lowercase())
        .collect();

    let record_count = lines.filter(|line| !line.trim().is_empty()).count();

    Ok(CsvPreview {
        record_count,
        headers,
    })
}

/// User-facing acknowledgement for an import attempt.
///
/// Both outcomes are transient, non-fatal notices; failure changes no
/// state because import never does.
pub fn import_notice(outcome: &ImportResult<CsvPreview>) -> Notice {
    match outcome {
        Ok(preview) => Notice::info(
            "CSV Import",
            format!(
                "Ready to import {} records. Connect a backend to process the data.",
                preview.record_count
            ),
        ),
        Err(_) => Notice::error(
            "Import Error",
            "Error reading CSV file. Please check the format.",
        ),
    }
}

/// Reads a file and inspects it; completion is delivered as this `Result`.
///
/// No shared state is touched on any path.
pub fn read_csv_file(path: &Path) -> ImportResult<CsvPreview> {
    let text = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    inspect_csv_text(&text)
}
