//! Self-contained HTML report renderer.
//!
//! # Responsibility
//! - Render a filtered memo subset into one portable HTML document: all
//!   styling inline, no external scripts or stylesheets, print-friendly.
//!
//! # Invariants
//! - Pure function of `(memos, config, stamp)`.
//! - Missing optional fields omit their markup instead of rendering empty
//!   placeholders.
//! - Field values are embedded verbatim; the document is a trusted-input
//!   archive format, not a sanitized web page.

use crate::model::memo::Memo;
use crate::report::summary::ReportSummary;
use crate::report::{ReportConfig, ReportStamp};
use std::fmt::Write as _;

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 40px; background: #f8fafc; }
        .header { background: #3b82f6; color: white; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
        .header h1 { margin: 0; font-size: 24px; }
        .header p { margin: 5px 0 0 0; opacity: 0.9; }
        .summary { background: white; padding: 20px; border-radius: 8px; margin-bottom: 30px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        .memo-card { background: white; border: 1px solid #e2e8f0; border-radius: 8px; padding: 20px; margin-bottom: 15px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        .memo-header { border-bottom: 1px solid #e2e8f0; padding-bottom: 10px; margin-bottom: 15px; }
        .memo-title { font-size: 18px; font-weight: bold; color: #1e293b; margin: 0 0 5px 0; }
        .memo-meta { color: #64748b; font-size: 14px; }
        .memo-content { color: #475569; line-height: 1.6; }
        .stats { display: flex; gap: 20px; margin-bottom: 20px; }
        .stat { background: #f1f5f9; padding: 15px; border-radius: 6px; text-align: center; flex: 1; }
        .stat-number { font-size: 24px; font-weight: bold; color: #3b82f6; }
        .stat-label { color: #64748b; font-size: 14px; margin-top: 5px; }
        @media print { body { margin: 20px; } }";

/// Renders the complete report document.
pub fn render_html(memos: &[Memo], config: &ReportConfig, stamp: &ReportStamp) -> String {
    let summary = ReportSummary::from_memos(memos, config);
    let generated = stamp.display.as_str();

    let mut cards = String::new();
    for memo in memos {
        push_memo_card(&mut cards, memo);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Memo System Report - {generated}</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <div class="header">
        <h1>&#128221; Memo System Report</h1>
        <p>Generated on {generated} | Total Memos: {total}</p>
    </div>

    <div class="summary">
        <h2>Report Summary</h2>
        <div class="stats">
            <div class="stat">
                <div class="stat-number">{total}</div>
                <div class="stat-label">Total Memos</div>
            </div>
            <div class="stat">
                <div class="stat-number">{senders}</div>
                <div class="stat-label">Unique Senders</div>
            </div>
            <div class="stat">
                <div class="stat-number">{recipients}</div>
                <div class="stat-label">Unique Recipients</div>
            </div>
        </div>
        <p><strong>Report Period:</strong> {period_from} to {period_to}</p>
    </div>

    <div class="memos-section">
        <h2>Memo Details</h2>
{cards}    </div>

    <div style="margin-top: 40px; padding-top: 20px; border-top: 1px solid #e2e8f0; text-align: center; color: #64748b; font-size: 12px;">
        <p>Generated by Memo Management System - {generated}</p>
    </div>
</body>
</html>"#,
        total = summary.total,
        senders = summary.unique_senders,
        recipients = summary.unique_recipients,
        period_from = summary.period_from,
        period_to = summary.period_to,
    )
}

fn push_memo_card(out: &mut String, memo: &Memo) {
    let date = memo
        .display_date()
        .unwrap_or_else(|| "Not specified".to_string());

    let _ = write!(
        out,
        r#"        <div class="memo-card">
            <div class="memo-header">
                <h3 class="memo-title">{subject}</h3>
                <div class="memo-meta">
                    <strong>From:</strong> {from} |
                    <strong>To:</strong> {to} |
                    <strong>Date:</strong> {date}"#,
        subject = memo.subject,
        from = memo.from,
        to = memo.to,
    );

    if let Some(dispatcher) = memo.data_dispatcher.as_deref() {
        let _ = write!(out, " | <strong>Dispatcher:</strong> {dispatcher}");
    }

    out.push_str(
        "\n                </div>\n            </div>\n",
    );

    if let Some(content) = memo.content.as_deref() {
        let _ = writeln!(out, r#"            <div class="memo-content">{content}</div>"#);
    }

    out.push_str("        </div>\n");
}
