//! Domain model for session-scoped memo data.
//!
//! # Responsibility
//! - Define the canonical memo record shared by store, report and view code.
//! - Enforce creation-boundary validation before a memo may exist.
//!
//! # Invariants
//! - Every memo is identified by a stable `MemoId`.
//! - `subject`, `from` and `to` are non-empty whenever a `Memo` exists.
//! - `received_date` is a well-formed `YYYY-MM-DD` string or absent.

pub mod memo;
