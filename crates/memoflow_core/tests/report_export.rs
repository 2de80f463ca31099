use chrono::NaiveDate;
use memoflow_core::{
    generate_with_stamp, DirectoryDownloads, DownloadSink, Memo, MemoDraft, NoticeSeverity,
    QueueNotifier, ReportConfig, ReportDocument, ReportFormat, ReportStamp,
};
use std::fs;

fn memo(subject: &str, date: &str) -> Memo {
    Memo::from_draft(&MemoDraft {
        subject: subject.to_string(),
        from: "Alice".to_string(),
        to: "Bob".to_string(),
        received_date: date.to_string(),
        ..MemoDraft::default()
    })
    .unwrap()
}

fn stamp() -> ReportStamp {
    ReportStamp::for_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

#[test]
fn html_pipeline_writes_dated_file_and_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectoryDownloads::new(dir.path());
    let mut notifier = QueueNotifier::new();
    let memos = vec![memo("a", "2024-01-10"), memo("b", "2024-03-05")];

    let saved = generate_with_stamp(
        &memos,
        &ReportConfig::default(),
        &stamp(),
        &sink,
        &mut notifier,
    )
    .unwrap();

    assert_eq!(saved.file_name, "memo-report-2024-06-01.html");
    assert_eq!(saved.memo_count, 2);
    assert_eq!(saved.path, dir.path().join("memo-report-2024-06-01.html"));

    let written = fs::read_to_string(&saved.path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("Total Memos: 2"));

    let notices = notifier.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Report Generated");
    assert_eq!(
        notices[0].body,
        "Successfully generated report with 2 memos."
    );
}

#[test]
fn csv_pipeline_applies_date_filter_before_export() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectoryDownloads::new(dir.path());
    let mut notifier = QueueNotifier::new();
    let memos = vec![memo("jan", "2024-01-10"), memo("mar", "2024-03-05")];
    let config = ReportConfig {
        date_from: "2024-02-01".to_string(),
        format: ReportFormat::Csv,
        ..ReportConfig::default()
    };

    let saved = generate_with_stamp(&memos, &config, &stamp(), &sink, &mut notifier).unwrap();

    assert_eq!(saved.file_name, "memo-report-2024-06-01.csv");
    assert_eq!(saved.memo_count, 1);

    let written = fs::read_to_string(&saved.path).unwrap();
    assert!(written.contains("\"mar\""));
    assert!(!written.contains("\"jan\""));
    assert_eq!(
        notifier.drain()[0].body,
        "Successfully generated report with 1 memos."
    );
}

#[test]
fn staging_file_never_outlives_the_save() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectoryDownloads::new(dir.path());

    let document = ReportDocument::new(
        "content".to_string(),
        ReportFormat::Csv,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    );
    sink.save(&document).unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(leftovers, vec!["memo-report-2024-06-01.csv".to_string()]);
}

#[test]
fn commit_failure_removes_staged_file() {
    let dir = tempfile::tempdir().unwrap();
    // Occupy the final path with a directory so the rename cannot land;
    // by then the staging file exists and has been written.
    fs::create_dir(dir.path().join("memo-report-2024-06-01.csv")).unwrap();
    let sink = DirectoryDownloads::new(dir.path());

    let document = ReportDocument::new(
        "content".to_string(),
        ReportFormat::Csv,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    );
    let err = sink.save(&document).unwrap_err();

    assert!(err.to_string().contains("memo-report-2024-06-01.csv"));
    assert!(!dir.path().join("memo-report-2024-06-01.csv.part").exists());
    assert!(dir.path().join("memo-report-2024-06-01.csv").is_dir());
}

#[test]
fn failed_save_surfaces_error_notice_and_stages_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let sink = DirectoryDownloads::new(&missing);
    let mut notifier = QueueNotifier::new();

    let err = generate_with_stamp(
        &[memo("a", "2024-01-10")],
        &ReportConfig::default(),
        &stamp(),
        &sink,
        &mut notifier,
    )
    .unwrap_err();

    assert!(err.to_string().contains("failed to save report"));
    assert!(!missing.exists());

    let notices = notifier.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, NoticeSeverity::Error);
    assert_eq!(notices[0].title, "Report Failed");
}

#[test]
fn document_carries_format_mime_type() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let html = ReportDocument::new(String::new(), ReportFormat::Html, date);
    let csv = ReportDocument::new(String::new(), ReportFormat::Csv, date);

    assert_eq!(html.mime_type, "text/html");
    assert_eq!(csv.mime_type, "text/csv");
}
