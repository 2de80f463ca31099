//! Memo creation use-case service.
//!
//! # Responsibility
//! - Own the session store and guard its single mutation path.
//! - Surface validation failures and creation success as user notices.
//!
//! # Invariants
//! - A draft that fails validation changes nothing.
//! - Admitted memos are prepended, so the store stays newest-first.

use crate::model::memo::{Memo, MemoDraft, MemoId, MemoValidationError};
use crate::notify::{Notice, Notifier};
use crate::store::MemoStore;
use log::{info, warn};

const REQUIRED_FIELDS_BODY: &str = "Please fill in all required fields (Subject, From, To)";

/// Owns the session memo store and its creation boundary.
#[derive(Debug, Default)]
pub struct MemoService {
    store: MemoStore,
}

impl MemoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to session state for list and report callers.
    pub fn store(&self) -> &MemoStore {
        &self.store
    }

    /// Validates and admits a new memo.
    ///
    /// # Contract
    /// - On success: assigns a fresh `MemoId`, prepends the memo, pushes a
    ///   success notice, returns the new id.
    /// - On failure: pushes an error notice, leaves the store untouched,
    ///   returns the validation error.
    pub fn submit(
        &mut self,
        draft: &MemoDraft,
        notifier: &mut dyn Notifier,
    ) -> Result<MemoId, MemoValidationError> {
        let memo = match Memo::from_draft(draft) {
            Ok(memo) => memo,
            Err(err) => {
                warn!(
                    "event=memo_rejected module=service status=error reason={}",
                    err
                );
                notifier.push(Notice::error("Validation Error", validation_body(&err)));
                return Err(err);
            }
        };

        let id = memo.id;
        self.store.prepend(memo);
        info!(
            "event=memo_created module=service status=ok id={} store_len={}",
            id,
            self.store.len()
        );
        notifier.push(Notice::info("Success", "Memo has been created successfully!"));
        Ok(id)
    }
}

fn validation_body(err: &MemoValidationError) -> String {
    match err {
        MemoValidationError::MissingSubject
        | MemoValidationError::MissingFrom
        | MemoValidationError::MissingTo => REQUIRED_FIELDS_BODY.to_string(),
        MemoValidationError::InvalidReceivedDate(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::validation_body;
    use crate::model::memo::MemoValidationError;

    #[test]
    fn missing_field_notice_uses_form_wording() {
        let body = validation_body(&MemoValidationError::MissingFrom);
        assert!(body.contains("Subject, From, To"));
    }

    #[test]
    fn date_notice_names_the_bad_value() {
        let err = MemoValidationError::InvalidReceivedDate("05-2024".to_string());
        assert!(validation_body(&err).contains("05-2024"));
    }
}
