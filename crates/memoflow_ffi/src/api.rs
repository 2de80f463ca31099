//! FFI use-case API for the UI shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions (form submit, list snapshot,
//!   report generation, import acknowledgement) to the embedding UI.
//! - Hold the process-global session state the UI page owns conceptually.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings with stable meaning; structured
//!   results are JSON objects with a `status` field of `ok` or `error`.

use memoflow_core::{
    core_version as core_version_inner, default_log_level, generate, import_notice,
    init_logging as init_logging_inner, list_entries, read_csv_file, DirectoryDownloads,
    MemoDraft, MemoFilter, MemoService, Notifier, QueueNotifier, ReportConfig, ReportFormat,
};
use serde_json::json;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Session state mirroring the original top-level page: one store behind
/// the creation boundary, one pending-toast queue.
struct Session {
    service: MemoService,
    notifier: QueueNotifier,
}

fn session() -> MutexGuard<'static, Session> {
    let mutex = SESSION.get_or_init(|| {
        Mutex::new(Session {
            service: MemoService::new(),
            notifier: QueueNotifier::new(),
        })
    });
    // The UI calls in from a single thread; if a previous call panicked we
    // still hand out the state rather than poisoning every later call.
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// # FFI contract
/// - An empty `level` selects the build-mode default (`debug` in debug
///   builds, `info` in release builds).
/// - Idempotent for the same `level + log_dir`; conflicting
///   reconfiguration returns an error message.
/// - Returns empty string on success, error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level()
    } else {
        level.as_str()
    };
    match init_logging_inner(level, &log_dir) {
        Ok(()) => String::new(),
        Err(message) => message,
    }
}

/// Submits the creation form.
///
/// Empty strings mean "not provided" for the optional fields, exactly as
/// the form's working state holds them.
///
/// # FFI contract
/// - Returns `{"status":"ok","id":"<uuid>"}` on success.
/// - Returns `{"status":"error","message":...}` on validation failure; the
///   store is untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_memo(
    subject: String,
    received_date: String,
    from: String,
    to: String,
    data_dispatcher: String,
    content: String,
) -> String {
    let draft = MemoDraft {
        subject,
        received_date,
        from,
        to,
        data_dispatcher,
        content,
    };

    let mut session = session();
    let Session { service, notifier } = &mut *session;
    match service.submit(&draft, notifier) {
        Ok(id) => json!({ "status": "ok", "id": id.to_string() }).to_string(),
        Err(err) => json!({ "status": "error", "message": err.to_string() }).to_string(),
    }
}

/// Snapshot of the memo list as display rows, newest first.
///
/// # FFI contract
/// - Returns a JSON array; empty array means the UI renders its
///   empty state.
#[flutter_rust_bridge::frb(sync)]
pub fn list_memos() -> String {
    let session = session();
    let entries = list_entries(session.service.store());
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Number of memos in the session store (count badge).
#[flutter_rust_bridge::frb(sync)]
pub fn memo_count() -> u32 {
    session().service.store().len() as u32
}

/// Hands pending user notices (toasts) to the UI, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn drain_notices() -> String {
    let notices: Vec<_> = session()
        .notifier
        .drain()
        .into_iter()
        .map(|notice| {
            json!({
                "severity": match notice.severity {
                    memoflow_core::NoticeSeverity::Info => "info",
                    memoflow_core::NoticeSeverity::Error => "error",
                },
                "title": notice.title,
                "body": notice.body,
            })
        })
        .collect();
    json!(notices).to_string()
}

/// Runs the report pipeline and saves the document under `out_dir`.
///
/// # FFI contract
/// - `filter_by` is `all|recent|urgent`, `format` is `html|csv`; unknown
///   values return an error payload without running the pipeline.
/// - Returns `{"status":"ok","fileName":...,"path":...,"memoCount":...}`
///   or `{"status":"error","message":...}`.
#[flutter_rust_bridge::frb(sync)]
pub fn generate_report(
    date_from: String,
    date_to: String,
    filter_by: String,
    format: String,
    out_dir: String,
) -> String {
    let Some(filter_by) = MemoFilter::parse(&filter_by) else {
        return json!({ "status": "error", "message": format!("unknown filter `{filter_by}`") })
            .to_string();
    };
    let Some(format) = ReportFormat::parse(&format) else {
        return json!({ "status": "error", "message": format!("unknown format `{format}`") })
            .to_string();
    };

    let config = ReportConfig {
        date_from,
        date_to,
        filter_by,
        format,
    };
    let sink = DirectoryDownloads::new(out_dir);

    let mut session = session();
    let Session { service, notifier } = &mut *session;
    match generate(service.store().snapshot(), &config, &sink, notifier) {
        Ok(saved) => json!({
            "status": "ok",
            "fileName": saved.file_name,
            "path": saved.path.display().to_string(),
            "memoCount": saved.memo_count,
        })
        .to_string(),
        Err(err) => json!({ "status": "error", "message": err.to_string() }).to_string(),
    }
}

/// Acknowledges a CSV import selection without ingesting anything.
///
/// Either outcome is also queued as a user notice for `drain_notices`,
/// like every other user-visible result.
///
/// # FFI contract
/// - Returns `{"status":"ok","recordCount":...}` on a readable file; the
///   store is never modified on any path.
/// - Returns `{"status":"error","message":...}` for unreadable or
///   malformed files.
#[flutter_rust_bridge::frb(sync)]
pub fn inspect_csv_import(path: String) -> String {
    let outcome = read_csv_file(Path::new(&path));
    let notice = import_notice(&outcome);
    session().notifier.push(notice.clone());

    match outcome {
        Ok(preview) => json!({
            "status": "ok",
            "recordCount": preview.record_count,
            "message": notice.body,
        })
        .to_string(),
        Err(err) => json!({ "status": "error", "message": err.to_string() }).to_string(),
    }
}
