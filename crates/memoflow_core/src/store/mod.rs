//! In-memory session memo store.
//!
//! # Responsibility
//! - Hold every memo created during the current session, newest first.
//! - Provide read-only snapshots for list and report callers.
//!
//! # Invariants
//! - Append-only: the only mutation is `prepend`; no update, no delete.
//! - Ordering is insertion order with the newest memo at index 0.
//! - Nothing here survives the session; there is no persistence path.

use crate::model::memo::{Memo, MemoId};

/// Session-scoped ordered memo collection.
#[derive(Debug, Default)]
pub struct MemoStore {
    memos: Vec<Memo>,
}

impl MemoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a memo at the front (newest-first ordering).
    ///
    /// Callers must only pass memos produced by the creation boundary;
    /// the store does not re-validate.
    pub fn prepend(&mut self, memo: Memo) {
        self.memos.insert(0, memo);
    }

    /// Read-only view of all memos in store order.
    pub fn snapshot(&self) -> &[Memo] {
        &self.memos
    }

    /// Looks up one memo by stable identity.
    pub fn find(&self, id: MemoId) -> Option<&Memo> {
        self.memos.iter().find(|memo| memo.id == id)
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }
}
