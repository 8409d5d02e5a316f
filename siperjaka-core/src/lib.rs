//! SIPERJAKA application core
//!
//! Workflow engine for part-time government employment contract records
//! (PPPK Paruh Waktu) and renderers for the legal documents produced from
//! them.
//!
//! The core is transport- and storage-agnostic: callers inject a
//! [`store::RecordStore`] implementation and drive the [`WorkflowEngine`];
//! document renderers are pure functions over already-loaded records.

pub mod engine;
pub mod render;
pub mod store;
pub mod utils;

// Re-exports
pub use engine::{DashboardSummary, WorkflowEngine};
pub use store::{MemoryStore, RecordStore, StoreError, StoreResult};
