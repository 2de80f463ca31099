//! Core domain logic for MemoFlow.
//! This crate is the single source of truth for business invariants:
//! memo creation, the session store, and the report pipeline.

pub mod export;
pub mod import;
pub mod logging;
pub mod model;
pub mod notify;
pub mod report;
pub mod service;
pub mod store;
pub mod view;

pub use export::{
    report_file_name, DirectoryDownloads, DownloadSink, ExportError, ExportResult, ReportDocument,
};
pub use import::{
    import_notice, inspect_csv_text, read_csv_file, CsvPreview, ImportError, ImportResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::memo::{Memo, MemoDraft, MemoId, MemoValidationError};
pub use notify::{LogNotifier, Notice, NoticeSeverity, Notifier, QueueNotifier};
pub use report::csv::{render_csv, CSV_HEADER};
pub use report::filter::filter_memos;
pub use report::html::render_html;
pub use report::summary::ReportSummary;
pub use report::{MemoFilter, ReportConfig, ReportFormat, ReportStamp};
pub use service::memo_service::MemoService;
pub use service::report_service::{generate, generate_with_stamp, SavedReport};
pub use store::MemoStore;
pub use view::{
    list_entries, memo_count_label, select, MemoListEntry, EMPTY_STATE_HINT, EMPTY_STATE_TITLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
