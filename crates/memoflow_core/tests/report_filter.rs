use memoflow_core::{filter_memos, Memo, MemoDraft, MemoFilter, ReportConfig};

fn memo(subject: &str, date: &str) -> Memo {
    Memo::from_draft(&MemoDraft {
        subject: subject.to_string(),
        from: "sender".to_string(),
        to: "recipient".to_string(),
        received_date: date.to_string(),
        ..MemoDraft::default()
    })
    .unwrap()
}

fn bounds(from: &str, to: &str) -> ReportConfig {
    ReportConfig {
        date_from: from.to_string(),
        date_to: to.to_string(),
        ..ReportConfig::default()
    }
}

#[test]
fn no_bounds_passes_everything_in_order() {
    let memos = vec![
        memo("c", "2024-03-05"),
        memo("b", ""),
        memo("a", "2024-01-10"),
    ];

    let filtered = filter_memos(&memos, &ReportConfig::default());
    let subjects: Vec<&str> = filtered.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, ["c", "b", "a"]);
}

#[test]
fn output_is_an_order_preserving_subsequence() {
    let memos = vec![
        memo("jan", "2024-01-10"),
        memo("feb", "2024-02-15"),
        memo("mar", "2024-03-05"),
        memo("apr", "2024-04-01"),
    ];

    let filtered = filter_memos(&memos, &bounds("2024-02-01", "2024-03-31"));
    let subjects: Vec<&str> = filtered.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, ["feb", "mar"]);
}

#[test]
fn lower_bound_only_excludes_earlier_dates() {
    let memos = vec![memo("jan", "2024-01-10"), memo("mar", "2024-03-05")];

    let filtered = filter_memos(&memos, &bounds("2024-02-01", ""));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].subject, "mar");
}

#[test]
fn bounds_are_inclusive_on_both_ends() {
    let memos = vec![
        memo("low", "2024-02-01"),
        memo("high", "2024-02-29"),
        memo("out", "2024-03-01"),
    ];

    let filtered = filter_memos(&memos, &bounds("2024-02-01", "2024-02-29"));
    let subjects: Vec<&str> = filtered.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, ["low", "high"]);
}

#[test]
fn absent_received_date_passes_any_bounds() {
    let memos = vec![memo("undated", ""), memo("dated", "2020-01-01")];

    let filtered = filter_memos(&memos, &bounds("2024-02-01", "2024-02-29"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].subject, "undated");
}

#[test]
fn comparison_is_lexicographic_on_the_raw_string() {
    // "2024-1-5" is malformed and never admitted, but string ordering on
    // admitted YYYY-MM-DD values behaves exactly like the calendar.
    let memos = vec![memo("early", "2024-09-30"), memo("late", "2024-10-01")];

    let filtered = filter_memos(&memos, &bounds("2024-10-01", ""));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].subject, "late");
}

#[test]
fn category_filters_are_accepted_but_pass_through() {
    let memos = vec![memo("a", "2024-01-10"), memo("b", "")];

    for filter_by in [MemoFilter::All, MemoFilter::Recent, MemoFilter::Urgent] {
        let config = ReportConfig {
            filter_by,
            ..ReportConfig::default()
        };
        assert_eq!(filter_memos(&memos, &config).len(), memos.len());
    }
}

#[test]
fn filter_does_not_mutate_input() {
    let memos = vec![memo("keep", "2024-01-10")];
    let before = memos.clone();

    let _ = filter_memos(&memos, &bounds("2025-01-01", ""));
    assert_eq!(memos, before);
}
