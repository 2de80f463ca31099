//! Memo domain model.
//!
//! # Responsibility
//! - Define the canonical memo record and its creation-boundary input.
//! - Validate required fields and date shape before a memo is admitted.
//!
//! # Invariants
//! - `id` is stable and never reused for another memo within a session.
//! - `subject`, `from` and `to` are non-empty after trimming.
//! - `received_date`, when present, matches `YYYY-MM-DD` exactly; range
//!   filtering compares these strings lexicographically, which is only
//!   sound while this shape invariant holds.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a memo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemoId = Uuid;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Validation error raised at the memo creation boundary.
///
/// Validation happens only here; once a `Memo` exists it is never mutated,
/// so the invariants cannot be broken later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoValidationError {
    /// Required `subject` field is empty.
    MissingSubject,
    /// Required `from` field is empty.
    MissingFrom,
    /// Required `to` field is empty.
    MissingTo,
    /// `received_date` is present but not a `YYYY-MM-DD` string.
    InvalidReceivedDate(String),
}

impl Display for MemoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSubject => write!(f, "subject is required"),
            Self::MissingFrom => write!(f, "from is required"),
            Self::MissingTo => write!(f, "to is required"),
            Self::InvalidReceivedDate(value) => {
                write!(f, "received date `{value}` is not a YYYY-MM-DD date")
            }
        }
    }
}

impl Error for MemoValidationError {}

/// Creation-boundary input record: a memo without an identity yet.
///
/// All fields are plain strings because this mirrors the form's working
/// state; empty strings mean "not provided" for the optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoDraft {
    #[serde(default)]
    pub subject: String,
    #[serde(default, rename = "receivedDate")]
    pub received_date: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, rename = "dataDispatcher")]
    pub data_dispatcher: String,
    #[serde(default)]
    pub content: String,
}

impl MemoDraft {
    /// Checks the creation-boundary invariants without consuming the draft.
    ///
    /// # Errors
    /// - Missing-field variants for empty `subject`/`from`/`to`.
    /// - `InvalidReceivedDate` when a non-empty date is not `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), MemoValidationError> {
        if self.subject.trim().is_empty() {
            return Err(MemoValidationError::MissingSubject);
        }
        if self.from.trim().is_empty() {
            return Err(MemoValidationError::MissingFrom);
        }
        if self.to.trim().is_empty() {
            return Err(MemoValidationError::MissingTo);
        }
        let date = self.received_date.trim();
        if !date.is_empty() && !ISO_DATE_RE.is_match(date) {
            return Err(MemoValidationError::InvalidReceivedDate(date.to_string()));
        }
        Ok(())
    }
}

/// Canonical memo record.
///
/// Wire names use camelCase (`receivedDate`, `dataDispatcher`) so UI-facing
/// payloads keep the original interface shape; absent optionals serialize
/// as empty strings for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Stable session-scoped identity, assigned at creation.
    pub id: MemoId,
    pub subject: String,
    pub from: String,
    pub to: String,
    /// ISO `YYYY-MM-DD` when present. Compared as a string for filtering.
    #[serde(default, rename = "receivedDate", with = "empty_as_none")]
    pub received_date: Option<String>,
    #[serde(default, rename = "dataDispatcher", with = "empty_as_none")]
    pub data_dispatcher: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub content: Option<String>,
}

impl Memo {
    /// Admits a validated draft as a memo with a fresh identity.
    ///
    /// # Errors
    /// Returns the draft's validation error unchanged; no memo is produced.
    pub fn from_draft(draft: &MemoDraft) -> Result<Self, MemoValidationError> {
        Self::from_draft_with_id(Uuid::new_v4(), draft)
    }

    /// Admits a validated draft with a caller-provided identity.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this memo's lifetime.
    pub fn from_draft_with_id(id: MemoId, draft: &MemoDraft) -> Result<Self, MemoValidationError> {
        draft.validate()?;
        Ok(Self {
            id,
            subject: draft.subject.clone(),
            from: draft.from.clone(),
            to: draft.to.clone(),
            received_date: non_empty(&draft.received_date),
            data_dispatcher: non_empty(&draft.data_dispatcher),
            content: non_empty(&draft.content),
        })
    }

    /// Locale-style display form of `received_date` (`M/D/YYYY`).
    ///
    /// Returns `None` when no date was recorded; callers render their own
    /// placeholder. A stored date that fails to parse falls back to the raw
    /// string rather than being hidden.
    pub fn display_date(&self) -> Option<String> {
        self.received_date.as_deref().map(locale_date)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn locale_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format!(
            "{}/{}/{}",
            date.format("%-m"),
            date.format("%-d"),
            date.format("%Y")
        ),
        Err(_) => iso.to_string(),
    }
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            Ok(None)
        } else {
            Ok(Some(raw))
        }
    }
}
