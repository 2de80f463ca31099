//! Read-only list presentation over a store snapshot.
//!
//! # Responsibility
//! - Project memos into display rows for the list view, in store order.
//! - Back the optional per-memo selection callback.
//!
//! # Invariants
//! - Pure reads: no filtering, no sorting, no mutation.

use crate::model::memo::{Memo, MemoId};
use crate::store::MemoStore;

/// Empty-state heading shown when no memos exist yet.
pub const EMPTY_STATE_TITLE: &str = "No Memos Yet";
/// Empty-state guidance line.
pub const EMPTY_STATE_HINT: &str =
    "Create your first memo using the form above or import from CSV to get started.";

/// One display row of the memo list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MemoListEntry {
    pub id: MemoId,
    pub subject: String,
    pub from: String,
    pub to: String,
    /// Locale-style date (`M/D/YYYY`) or `None` for the date badge to hide.
    #[serde(rename = "displayDate")]
    pub display_date: Option<String>,
    #[serde(rename = "dataDispatcher")]
    pub data_dispatcher: Option<String>,
    pub content: Option<String>,
}

impl MemoListEntry {
    fn from_memo(memo: &Memo) -> Self {
        Self {
            id: memo.id,
            subject: memo.subject.clone(),
            from: memo.from.clone(),
            to: memo.to.clone(),
            display_date: memo.display_date(),
            data_dispatcher: memo.data_dispatcher.clone(),
            content: memo.content.clone(),
        }
    }
}

/// Projects the whole store into display rows, newest first.
pub fn list_entries(store: &MemoStore) -> Vec<MemoListEntry> {
    store.snapshot().iter().map(MemoListEntry::from_memo).collect()
}

/// Resolves a selection callback's target memo.
pub fn select(store: &MemoStore, id: MemoId) -> Option<&Memo> {
    store.find(id)
}

/// Count badge text: "1 memo" / "N memos".
pub fn memo_count_label(count: usize) -> String {
    if count == 1 {
        "1 memo".to_string()
    } else {
        format!("{count} memos")
    }
}
