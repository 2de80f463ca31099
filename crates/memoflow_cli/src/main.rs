//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `memoflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use memoflow_core::{
    filter_memos, render_csv, MemoDraft, MemoService, QueueNotifier, ReportConfig,
};

fn main() {
    println!("memoflow_core version={}", memoflow_core::core_version());

    let mut service = MemoService::new();
    let mut notifier = QueueNotifier::new();
    let draft = MemoDraft {
        subject: "Smoke check".to_string(),
        from: "cli".to_string(),
        to: "core".to_string(),
        received_date: "2024-01-01".to_string(),
        ..MemoDraft::default()
    };

    match service.submit(&draft, &mut notifier) {
        Ok(_) => {
            let filtered = filter_memos(service.store().snapshot(), &ReportConfig::default());
            let csv = render_csv(&filtered);
            println!("memoflow_core memos={}", service.store().len());
            println!("memoflow_core csv_lines={}", csv.lines().count());
        }
        Err(err) => println!("memoflow_core submit_error={err}"),
    }
}
