//! Use-case services over the session store.
//!
//! # Responsibility
//! - Provide the only entry points that mutate or read session state on
//!   behalf of the UI: memo creation and report generation.
//!
//! # Invariants
//! - Services never bypass creation-boundary validation.
//! - All user-visible outcomes go through the `Notifier` surface.

pub mod memo_service;
pub mod report_service;
