//! Report generation use-case service.
//!
//! # Responsibility
//! - Glue the pipeline together: filter a store snapshot, render per the
//!   configured format, hand the document to a download sink.
//! - Surface the outcome as a user notice and a structured log event.
//!
//! # Invariants
//! - The store snapshot is read, never written.
//! - The generation stamp is taken once per run; everything downstream of
//!   it is deterministic.

use crate::export::{DownloadSink, ExportResult, ReportDocument};
use crate::model::memo::Memo;
use crate::notify::{Notice, Notifier};
use crate::report::csv::render_csv;
use crate::report::filter::filter_memos;
use crate::report::html::render_html;
use crate::report::{ReportConfig, ReportFormat, ReportStamp};
use log::{error, info};
use std::path::PathBuf;

/// Outcome of one successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    /// Where the sink placed the document.
    pub path: PathBuf,
    /// Download file name (`memo-report-<date>.<ext>`).
    pub file_name: String,
    /// Number of memos included after filtering.
    pub memo_count: usize,
}

/// Runs the full pipeline with the current local date.
pub fn generate(
    memos: &[Memo],
    config: &ReportConfig,
    sink: &dyn DownloadSink,
    notifier: &mut dyn Notifier,
) -> ExportResult<SavedReport> {
    generate_with_stamp(memos, config, &ReportStamp::now(), sink, notifier)
}

/// Pipeline entry with a caller-provided stamp; deterministic for tests.
pub fn generate_with_stamp(
    memos: &[Memo],
    config: &ReportConfig,
    stamp: &ReportStamp,
    sink: &dyn DownloadSink,
    notifier: &mut dyn Notifier,
) -> ExportResult<SavedReport> {
    let filtered = filter_memos(memos, config);
    let content = match config.format {
        ReportFormat::Html => render_html(&filtered, config, stamp),
        ReportFormat::Csv => render_csv(&filtered),
    };
    let document = ReportDocument::new(content, config.format, stamp.date);

    let path = match sink.save(&document) {
        Ok(path) => path,
        Err(err) => {
            error!(
                "event=report_failed module=service status=error file={} reason={}",
                document.file_name, err
            );
            notifier.push(Notice::error("Report Failed", err.to_string()));
            return Err(err);
        }
    };

    info!(
        "event=report_generated module=service status=ok file={} memos={}",
        document.file_name,
        filtered.len()
    );
    notifier.push(Notice::info(
        "Report Generated",
        format!(
            "Successfully generated report with {} memos.",
            filtered.len()
        ),
    ));

    Ok(SavedReport {
        path,
        file_name: document.file_name,
        memo_count: filtered.len(),
    })
}
