//! Bulk record import
//!
//! Spreadsheet parsing happens outside the core; rows arrive here already
//! split into raw string fields. The core owns the validation and default
//! rules: rows missing both name and NIP are skipped, status is forced to
//! pending, and salary words are re-derived per row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use shared::error::AppResult;
use shared::models::{Actor, Employee, EmployeeStatus};

use super::transitions::{authorize, WorkflowOp};
use super::WorkflowEngine;

/// One raw import row, as the external sheet reader delivers it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRow {
    #[serde(default)]
    pub nip: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub place_of_birth: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub placement_unit: String,
    #[serde(default)]
    pub agreement_number: String,
    #[serde(default)]
    pub salary_amount: String,
    #[serde(default)]
    pub spmt_number: String,
    #[serde(default)]
    pub sk_number: String,
    #[serde(default)]
    pub sk_date: String,
    #[serde(default)]
    pub tmt_date: String,
    #[serde(default)]
    pub spmt_date: String,
}

impl ImportRow {
    /// A row without either identifier carries nothing to key on
    fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.nip.trim().is_empty()
    }
}

/// Import result counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

/// Sheet dates arrive as `YYYY-MM-DD` strings; anything else means unset
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl WorkflowEngine {
    /// Import a batch of raw rows with upsert-by-NIP semantics.
    ///
    /// A row whose NIP matches an existing record replaces that record
    /// (keeping its id); otherwise a new record is created. Every imported
    /// row lands in pending, whatever the sheet claimed.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn import_rows(
        &self,
        actor: &Actor,
        rows: Vec<ImportRow>,
    ) -> AppResult<ImportOutcome> {
        // Admin gate uses a probe record: import touches the whole set
        authorize(WorkflowOp::AdminOverride, actor, &Employee::default())?;

        let existing = self.list().await?;
        let mut outcome = ImportOutcome::default();

        for row in rows {
            if row.is_empty() {
                outcome.skipped += 1;
                continue;
            }

            let id = existing
                .iter()
                .find(|e| !row.nip.trim().is_empty() && e.nip == row.nip.trim())
                .map(|e| e.id.clone())
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            let mut record = Employee {
                id,
                nip: row.nip.trim().to_string(),
                name: row.name.trim().to_string(),
                place_of_birth: row.place_of_birth,
                date_of_birth: parse_date(&row.date_of_birth),
                education: row.education,
                address: row.address,
                position: row.position,
                unit: row.unit,
                placement_unit: row.placement_unit,
                agreement_number: row.agreement_number,
                status: EmployeeStatus::Pending,
                spmt_number: row.spmt_number,
                sk_number: row.sk_number,
                sk_date: parse_date(&row.sk_date),
                tmt_date: parse_date(&row.tmt_date),
                spmt_date: parse_date(&row.spmt_date),
                ..Default::default()
            };
            record.set_salary(&row.salary_amount);

            self.store.upsert_employee(record).await?;
            outcome.imported += 1;
        }

        info!(imported = outcome.imported, skipped = outcome.skipped, "import finished");
        Ok(outcome)
    }
}
