//! Record store contract
//!
//! Persistence is an external collaborator. The engine sees this trait and
//! nothing else; a store handle is injected at engine construction, so the
//! core carries no global client state. Column naming, wire formats and
//! transport all belong to the implementation.

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{Employee, OrgSettings};
use thiserror::Error;

pub mod memory;

// Re-exports
pub use memory::MemoryStore;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::not_found(what),
            StoreError::Duplicate(nip) => AppError::nip_exists(nip),
            // Backend text stays in details, never in the user-facing message
            StoreError::Backend(cause) => AppError::persistence(cause),
        }
    }
}

/// External record store contract
///
/// Every operation is a single atomic commit point: a failed call means the
/// store is unchanged and the caller must treat the operation as not applied.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, most recently created first
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    /// Insert if absent, else replace by `id`.
    ///
    /// Enforces the unique constraint on `nip`: a record whose NIP belongs
    /// to a different `id` is rejected with [`StoreError::Duplicate`].
    async fn upsert_employee(&self, record: Employee) -> StoreResult<Employee>;

    /// Permanently remove a record
    async fn delete_employee(&self, id: &str) -> StoreResult<()>;

    /// The settings singleton, if one has been written
    async fn get_settings(&self) -> StoreResult<Option<OrgSettings>>;

    /// Replace the settings singleton
    async fn put_settings(&self, settings: OrgSettings) -> StoreResult<OrgSettings>;
}
