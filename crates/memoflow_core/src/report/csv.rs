//! CSV report renderer.
//!
//! # Responsibility
//! - Render a filtered memo subset as rows under a fixed header.
//!
//! # Invariants
//! - Column order is fixed: Subject, From, To, Received Date,
//!   Data Dispatcher, Content.
//! - Every value is double-quoted; embedded quotes, commas and newlines are
//!   NOT escaped. A field containing them produces a row standard CSV
//!   readers cannot parse back. Known limitation of the export schema;
//!   consumers rely on the raw shape, so it is kept rather than fixed.

use crate::model::memo::Memo;

/// Fixed header row of the export schema.
pub const CSV_HEADER: &str = "Subject,From,To,Received Date,Data Dispatcher,Content";

/// Renders header plus one row per memo, rows joined with `\n`.
///
/// Absent optional fields render as empty quoted fields.
pub fn render_csv(memos: &[Memo]) -> String {
    let mut lines = Vec::with_capacity(memos.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for memo in memos {
        lines.push(
            [
                memo.subject.as_str(),
                memo.from.as_str(),
                memo.to.as_str(),
                memo.received_date.as_deref().unwrap_or(""),
                memo.data_dispatcher.as_deref().unwrap_or(""),
                memo.content.as_deref().unwrap_or(""),
            ]
            .map(|field| format!("\"{field}\""))
            .join(","),
        );
    }
    lines.join("\n")
}
