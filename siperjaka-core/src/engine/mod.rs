//! Contract workflow engine
//!
//! Drives records through `pending -> verified_by_employee -> approved`,
//! enforcing the transition table in [`transitions`] against the injected
//! [`RecordStore`]. Every operation is a single read-modify-write whose only
//! commit point is the store call: a failed write leaves nothing applied.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use shared::error::{AppError, AppResult};
use shared::models::{
    Actor, Employee, EmployeeCreate, EmployeeSelfUpdate, EmployeeStatus, EmployeeUpdate,
    OrgSettings, SettingsUpdate,
};

use crate::render;
use crate::store::RecordStore;
use crate::utils::validation::{
    validate_nip, validate_optional_text, validate_required_text, MAX_NAME_LEN,
};

pub mod import;
pub mod transitions;

use transitions::{authorize, WorkflowOp};

/// Dashboard counts over the record set
///
/// `pending` counts everything not yet approved, matching the dashboard the
/// records were always shown on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
}

/// Contract record workflow engine
///
/// Holds the injected store handle; construct one per process (or per test)
/// with whatever [`RecordStore`] implementation the deployment uses.
pub struct WorkflowEngine {
    store: Arc<dyn RecordStore>,
}

impl WorkflowEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    // ==================== Queries ====================

    /// All records, most recently created first
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.store.list_employees().await?)
    }

    /// Case-insensitive name/NIP substring search
    pub async fn search(&self, query: &str) -> AppResult<Vec<Employee>> {
        let needle = query.trim().to_lowercase();
        let mut records = self.list().await?;
        if !needle.is_empty() {
            records.retain(|e| {
                e.name.to_lowercase().contains(&needle) || e.nip.contains(&needle)
            });
        }
        Ok(records)
    }

    /// Dashboard counts
    pub async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        let records = self.list().await?;
        let approved = records
            .iter()
            .filter(|e| e.status == EmployeeStatus::Approved)
            .count();
        Ok(DashboardSummary {
            total: records.len(),
            pending: records.len() - approved,
            approved,
        })
    }

    async fn find_employee(&self, id: &str) -> AppResult<Employee> {
        if id.trim().is_empty() {
            return Err(AppError::required_field("id"));
        }
        let records = self.store.list_employees().await?;
        records
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::employee_not_found(id))
    }

    // ==================== Workflow operations ====================

    /// Create a record (admin manual entry). Status is forced to pending.
    #[instrument(skip(self, data), fields(nip = %data.nip))]
    pub async fn create(&self, actor: &Actor, data: EmployeeCreate) -> AppResult<Employee> {
        if !actor.is_admin() {
            return Err(AppError::admin_required().with_detail("op", "create"));
        }
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_nip(&data.nip)?;

        // The store enforces uniqueness too; checking here keeps the error
        // shaped for the caller instead of surfacing a write conflict.
        let existing = self.store.list_employees().await?;
        if existing.iter().any(|e| e.nip == data.nip) {
            return Err(AppError::nip_exists(data.nip));
        }

        let mut record = Employee {
            id: Uuid::new_v4().to_string(),
            nip: data.nip,
            name: data.name,
            place_of_birth: data.place_of_birth,
            date_of_birth: data.date_of_birth,
            education: data.education,
            address: data.address,
            position: data.position,
            unit: data.unit,
            placement_unit: data.placement_unit,
            agreement_number: data.agreement_number,
            status: EmployeeStatus::Pending,
            spmt_number: data.spmt_number,
            sk_number: data.sk_number,
            sk_date: data.sk_date,
            tmt_date: data.tmt_date,
            spmt_date: data.spmt_date,
            ..Default::default()
        };
        record.set_salary(&data.salary_amount);

        let created = self.store.upsert_employee(record).await?;
        info!(id = %created.id, "employee record created");
        Ok(created)
    }

    /// Employee corrects their own record while it is still pending
    #[instrument(skip(self, changes), fields(id = %id))]
    pub async fn employee_edit(
        &self,
        actor: &Actor,
        id: &str,
        changes: EmployeeSelfUpdate,
    ) -> AppResult<Employee> {
        validate_optional_text(&changes.name, "name", MAX_NAME_LEN)?;

        let mut record = self.find_employee(id).await?;
        if let Err(err) = authorize(WorkflowOp::EmployeeEdit, actor, &record) {
            debug!(category = err.category().as_str(), "employee edit rejected");
            return Err(err);
        }

        record.apply_self(changes);
        Ok(self.store.upsert_employee(record).await?)
    }

    /// Employee self-certifies: pending -> verified_by_employee
    ///
    /// The two-step confirmation dialog is the calling surface's concern;
    /// by the time this runs the employee has already confirmed.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn employee_submit_for_verification(
        &self,
        actor: &Actor,
        id: &str,
    ) -> AppResult<Employee> {
        let mut record = self.find_employee(id).await?;
        authorize(WorkflowOp::EmployeeSubmit, actor, &record)?;

        record.status = EmployeeStatus::VerifiedByEmployee;
        let saved = self.store.upsert_employee(record).await?;
        info!(id = %saved.id, status = saved.status.as_str(), "employee self-certified");
        Ok(saved)
    }

    /// Verifier approves: verified_by_employee -> approved
    #[instrument(skip(self), fields(id = %id))]
    pub async fn verifier_approve(&self, actor: &Actor, id: &str) -> AppResult<Employee> {
        let mut record = self.find_employee(id).await?;
        authorize(WorkflowOp::VerifierApprove, actor, &record)?;

        record.status = EmployeeStatus::Approved;
        let saved = self.store.upsert_employee(record).await?;
        info!(id = %saved.id, status = saved.status.as_str(), "record approved");
        Ok(saved)
    }

    /// Administrative field edit, any status
    #[instrument(skip(self, changes), fields(id = %id))]
    pub async fn admin_update(
        &self,
        actor: &Actor,
        id: &str,
        changes: EmployeeUpdate,
    ) -> AppResult<Employee> {
        validate_optional_text(&changes.name, "name", MAX_NAME_LEN)?;
        if let Some(nip) = &changes.nip {
            validate_nip(nip)?;
        }

        let mut record = self.find_employee(id).await?;
        authorize(WorkflowOp::AdminOverride, actor, &record)?;

        record.apply(changes);
        Ok(self.store.upsert_employee(record).await?)
    }

    /// Administrative status override, bypasses the normal flow. Idempotent.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn admin_set_status(
        &self,
        actor: &Actor,
        id: &str,
        status: EmployeeStatus,
    ) -> AppResult<Employee> {
        let mut record = self.find_employee(id).await?;
        authorize(WorkflowOp::AdminOverride, actor, &record)?;

        record.status = status;
        let saved = self.store.upsert_employee(record).await?;
        info!(id = %saved.id, status = saved.status.as_str(), "status overridden");
        Ok(saved)
    }

    /// Permanently remove a record. Terminal and unrecoverable.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn admin_delete(&self, actor: &Actor, id: &str) -> AppResult<()> {
        let record = self.find_employee(id).await?;
        authorize(WorkflowOp::AdminOverride, actor, &record)?;

        self.store.delete_employee(&record.id).await?;
        info!(id = %record.id, "record deleted");
        Ok(())
    }

    // ==================== Settings ====================

    /// The settings singleton; seeds the fixed defaults on first read
    pub async fn get_settings(&self) -> AppResult<OrgSettings> {
        if let Some(settings) = self.store.get_settings().await? {
            return Ok(settings);
        }
        let seeded = self.store.put_settings(OrgSettings::default()).await?;
        info!("organization settings seeded with defaults");
        Ok(seeded)
    }

    /// Admin settings update
    #[instrument(skip(self, changes))]
    pub async fn update_settings(
        &self,
        actor: &Actor,
        changes: SettingsUpdate,
    ) -> AppResult<OrgSettings> {
        if !actor.is_admin() {
            return Err(AppError::admin_required().with_detail("op", "update_settings"));
        }
        let mut settings = self.get_settings().await?;
        settings.apply(changes);
        Ok(self.store.put_settings(settings).await?)
    }

    // ==================== Document rendering ====================

    /// Render the employment contract. Requires an approved record.
    pub async fn render_contract(&self, id: &str) -> AppResult<String> {
        let record = self.printable_record(id, "contract").await?;
        let settings = self.get_settings().await?;
        Ok(render::contract::render(&record, &settings))
    }

    /// Render the task-commencement statement (SPMT). Requires an approved
    /// record.
    pub async fn render_task_statement(&self, id: &str) -> AppResult<String> {
        let record = self.printable_record(id, "task statement").await?;
        let settings = self.get_settings().await?;
        Ok(render::spmt::render(&record, &settings))
    }

    /// Render the verification sheet. Available in any workflow position;
    /// verifier identity is supplied at render time, not stored.
    pub async fn render_verification_sheet(
        &self,
        id: &str,
        verifier_name: &str,
        verifier_nip: &str,
        verify_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        let record = self.find_employee(id).await?;
        let settings = self.get_settings().await?;
        Ok(render::verification::render(
            &record,
            &settings,
            verifier_name,
            verifier_nip,
            verify_date,
        ))
    }

    /// Load a record and reject before any formatting work if it is not
    /// printable yet.
    async fn printable_record(&self, id: &str, document: &str) -> AppResult<Employee> {
        let record = self.find_employee(id).await?;
        if !record.status.is_printable() {
            debug!(id = %record.id, status = record.status.as_str(), "rendering unavailable");
            return Err(AppError::rendering_unavailable(document)
                .with_detail("currentStatus", record.status.as_str()));
        }
        Ok(record)
    }
}
