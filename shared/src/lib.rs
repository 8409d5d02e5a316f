//! Shared types for SIPERJAKA
//!
//! Data models, error types and the pure text formatters used by both the
//! workflow engine and the document renderers.

pub mod error;
pub mod format;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
