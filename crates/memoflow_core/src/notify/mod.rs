//! User-visible notification surface.
//!
//! # Responsibility
//! - Carry transient, non-fatal notices (toasts) from use-case code to the
//!   embedding UI.
//! - Provide a log-backed sink for headless callers.
//!
//! # Invariants
//! - Notices never abort an operation; they describe what already happened.
//! - No notice is persisted or escalated anywhere.

use log::{error, info};

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// Routine confirmation.
    Info,
    /// Recoverable failure the user should see.
    Error,
}

/// One transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier {
    fn push(&mut self, notice: Notice);
}

/// Buffers notices until the UI drains them for display.
#[derive(Debug, Default)]
pub struct QueueNotifier {
    pending: Vec<Notice>,
}

impl QueueNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands all pending notices to the caller, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }
}

impl Notifier for QueueNotifier {
    fn push(&mut self, notice: Notice) {
        self.pending.push(notice);
    }
}

/// Emits notices as structured log lines for headless callers.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn push(&mut self, notice: Notice) {
        match notice.severity {
            NoticeSeverity::Info => info!(
                "event=user_notice module=notify status=ok title={} body={}",
                notice.title, notice.body
            ),
            NoticeSeverity::Error => error!(
                "event=user_notice module=notify status=error title={} body={}",
                notice.title, notice.body
            ),
        }
    }
}
