//! Date-range filter stage.
//!
//! # Responsibility
//! - Select the memo subset covered by a report configuration.
//!
//! # Invariants
//! - Output is a subsequence of the input: order preserved, nothing added.
//! - Bounds are inclusive and compared lexicographically on the ISO string;
//!   this is only sound because `received_date` is shape-validated at the
//!   creation boundary. Do not replace with calendar-aware comparison.
//! - A memo without `received_date` passes every bound unconditionally.

use crate::model::memo::Memo;
use crate::report::{MemoFilter, ReportConfig};

/// Returns the memos covered by `config`, in input order.
///
/// Pure function of its inputs; the store snapshot is never mutated.
pub fn filter_memos(memos: &[Memo], config: &ReportConfig) -> Vec<Memo> {
    let selected: Vec<Memo> = memos
        .iter()
        .filter(|memo| within_period(memo, config))
        .cloned()
        .collect();

    match config.filter_by {
        MemoFilter::All => {}
        // Recent/Urgent need priority metadata that session memos do not
        // carry; accepted as configuration, applied nowhere.
        MemoFilter::Recent | MemoFilter::Urgent => {}
    }

    selected
}

fn within_period(memo: &Memo, config: &ReportConfig) -> bool {
    let Some(date) = memo.received_date.as_deref() else {
        return true;
    };
    if !config.date_from.is_empty() && date < config.date_from.as_str() {
        return false;
    }
    if !config.date_to.is_empty() && date > config.date_to.as_str() {
        return false;
    }
    true
}
