//! Download boundary for rendered reports.
//!
//! # Responsibility
//! - Define the `(content, mime type, file name)` triple handed to a sink.
//! - Provide the directory-backed sink used outside tests.
//!
//! # Invariants
//! - File names follow `memo-report-<YYYY-MM-DD>.<ext>` from the
//!   generation date.
//! - The staging file used by `DirectoryDownloads` never outlives the call:
//!   it is renamed into place on success and removed on any failure.

use crate::report::ReportFormat;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure while staging or committing a download.
#[derive(Debug)]
pub struct ExportError {
    /// Path being written when the failure happened.
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to save report `{}`: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// A rendered document ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub content: String,
    pub mime_type: &'static str,
    pub file_name: String,
}

impl ReportDocument {
    /// Pairs rendered content with its format's mime type and the
    /// generation-dated file name.
    pub fn new(content: String, format: ReportFormat, generated: NaiveDate) -> Self {
        Self {
            content,
            mime_type: format.mime_type(),
            file_name: report_file_name(format, generated),
        }
    }
}

/// Builds `memo-report-<YYYY-MM-DD>.<ext>` for a generation date.
pub fn report_file_name(format: ReportFormat, generated: NaiveDate) -> String {
    format!(
        "memo-report-{}.{}",
        generated.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Destination for rendered documents.
///
/// The one unavoidable side effect of the pipeline lives behind this trait
/// so filter and render stay testable without touching a filesystem.
pub trait DownloadSink {
    /// Saves the document, returning the final path it landed at.
    fn save(&self, document: &ReportDocument) -> ExportResult<PathBuf>;
}

/// Sink writing downloads into a fixed directory.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloads {
    fn save(&self, document: &ReportDocument) -> ExportResult<PathBuf> {
        let final_path = self.dir.join(&document.file_name);
        let staged = StagedFile::create(self.dir.join(format!("{}.part", document.file_name)))?;

        staged.write_all(document.content.as_bytes())?;
        staged.commit(&final_path)?;

        Ok(final_path)
    }
}

/// Transient staging file, removed on drop unless committed.
struct StagedFile {
    path: PathBuf,
    committed: bool,
}

impl StagedFile {
    fn create(path: PathBuf) -> ExportResult<Self> {
        // Touch the file up front so every later failure has something
        // concrete to clean up.
        fs::File::create(&path).map_err(|source| ExportError {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            committed: false,
        })
    }

    fn write_all(&self, bytes: &[u8]) -> ExportResult<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| self.error(source))?;
        file.write_all(bytes).map_err(|source| self.error(source))?;
        file.flush().map_err(|source| self.error(source))
    }

    fn commit(mut self, final_path: &Path) -> ExportResult<()> {
        fs::rename(&self.path, final_path).map_err(|source| ExportError {
            path: final_path.to_path_buf(),
            source,
        })?;
        self.committed = true;
        Ok(())
    }

    fn error(&self, source: std::io::Error) -> ExportError {
        ExportError {
            path: self.path.clone(),
            source,
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::report_file_name;
    use crate::report::ReportFormat;
    use chrono::NaiveDate;

    #[test]
    fn file_name_uses_generation_date_and_extension() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            report_file_name(ReportFormat::Html, date),
            "memo-report-2024-06-01.html"
        );
        assert_eq!(
            report_file_name(ReportFormat::Csv, date),
            "memo-report-2024-06-01.csv"
        );
    }
}
