//! Summary statistics block shared by report renderers.

use crate::model::memo::Memo;
use crate::report::ReportConfig;
use std::collections::HashSet;

/// Aggregates embedded in the rendered report header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of memos in the filtered subset.
    pub total: usize,
    /// Cardinality of distinct `from` values in the subset.
    pub unique_senders: usize,
    /// Cardinality of distinct `to` values in the subset.
    pub unique_recipients: usize,
    /// Effective lower period bound, or "All time" when unbounded.
    pub period_from: String,
    /// Effective upper period bound, or "Present" when unbounded.
    pub period_to: String,
}

impl ReportSummary {
    /// Computes summary statistics over an already-filtered subset.
    pub fn from_memos(memos: &[Memo], config: &ReportConfig) -> Self {
        let senders: HashSet<&str> = memos.iter().map(|memo| memo.from.as_str()).collect();
        let recipients: HashSet<&str> = memos.iter().map(|memo| memo.to.as_str()).collect();

        let period_from = if config.date_from.is_empty() {
            "All time".to_string()
        } else {
            config.date_from.clone()
        };
        let period_to = if config.date_to.is_empty() {
            "Present".to_string()
        } else {
            config.date_to.clone()
        };

        Self {
            total: memos.len(),
            unique_senders: senders.len(),
            unique_recipients: recipients.len(),
            period_from,
            period_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReportSummary;
    use crate::report::ReportConfig;

    #[test]
    fn empty_subset_reports_open_period() {
        let summary = ReportSummary::from_memos(&[], &ReportConfig::default());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.unique_senders, 0);
        assert_eq!(summary.unique_recipients, 0);
        assert_eq!(summary.period_from, "All time");
        assert_eq!(summary.period_to, "Present");
    }
}
