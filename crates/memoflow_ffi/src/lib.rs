//! UI-facing bindings for MemoFlow core.

pub mod api;
