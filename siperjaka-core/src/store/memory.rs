//! In-memory record store
//!
//! Keeps records in creation order behind `parking_lot` locks. Serves as
//! the injectable store for tests and for embedded single-process use.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Employee, OrgSettings};

use super::{RecordStore, StoreError, StoreResult};

/// In-memory [`RecordStore`] implementation
#[derive(Default)]
pub struct MemoryStore {
    /// Creation order; listing reverses to newest-first
    employees: RwLock<Vec<Employee>>,
    settings: RwLock<Option<OrgSettings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let employees = self.employees.read();
        Ok(employees.iter().rev().cloned().collect())
    }

    async fn upsert_employee(&self, record: Employee) -> StoreResult<Employee> {
        let mut employees = self.employees.write();

        if employees
            .iter()
            .any(|e| e.nip == record.nip && e.id != record.id)
        {
            return Err(StoreError::Duplicate(record.nip));
        }

        match employees.iter_mut().find(|e| e.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => employees.push(record.clone()),
        }
        Ok(record)
    }

    async fn delete_employee(&self, id: &str) -> StoreResult<()> {
        let mut employees = self.employees.write();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(StoreError::NotFound(format!("employee {}", id)));
        }
        Ok(())
    }

    async fn get_settings(&self) -> StoreResult<Option<OrgSettings>> {
        Ok(self.settings.read().clone())
    }

    async fn put_settings(&self, settings: OrgSettings) -> StoreResult<OrgSettings> {
        *self.settings.write() = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, nip: &str) -> Employee {
        Employee {
            id: id.to_string(),
            nip: nip.to_string(),
            name: format!("Pegawai {}", id),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        store.upsert_employee(record("1", "111")).await.unwrap();
        store.upsert_employee(record("2", "222")).await.unwrap();

        let listed = store.list_employees().await.unwrap();
        assert_eq!(listed[0].id, "2");
        assert_eq!(listed[1].id, "1");
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let store = MemoryStore::new();
        store.upsert_employee(record("1", "111")).await.unwrap();

        let mut updated = record("1", "111");
        updated.name = "Diganti".to_string();
        store.upsert_employee(updated).await.unwrap();

        let listed = store.list_employees().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Diganti");
    }

    #[tokio::test]
    async fn test_upsert_rejects_duplicate_nip() {
        let store = MemoryStore::new();
        store.upsert_employee(record("1", "111")).await.unwrap();

        let err = store.upsert_employee(record("2", "111")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_employee("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_settings_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get_settings().await.unwrap().is_none());

        store.put_settings(OrgSettings::default()).await.unwrap();
        let settings = store.get_settings().await.unwrap().unwrap();
        assert_eq!(settings.sk_official, "BUPATI DEMAK");
    }
}
