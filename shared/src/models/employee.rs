//! Employee contract record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::terbilang;

/// Workflow status of a contract record
///
/// Wire literals are the historical ones: `pending`, `verified_by_employee`,
/// `approved`. No other value is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Pending,
    VerifiedByEmployee,
    Approved,
}

impl EmployeeStatus {
    /// Contract and SPMT documents may only be printed for approved records
    #[inline]
    pub const fn is_printable(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Wire literal, also used in error details and log fields
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::VerifiedByEmployee => "verified_by_employee",
            Self::Approved => "approved",
        }
    }
}

/// Employee contract record (one contract subject)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    /// 18-digit national identifier, unique across records.
    /// Also the employee's login credential on the calling surface.
    pub nip: String,
    pub name: String,
    pub place_of_birth: String,
    pub date_of_birth: Option<NaiveDate>,
    pub education: String,
    pub address: String,
    /// Jabatan
    pub position: String,
    /// Unit Kerja
    pub unit: String,
    /// Unit Penempatan (SPMT)
    pub placement_unit: String,
    /// Per-employee contract number
    pub agreement_number: String,
    /// Grouped digit string, e.g. "2.500.000"
    pub salary_amount: String,
    /// Derived terbilang form, e.g. "Dua Juta Lima Ratus Ribu Rupiah"
    pub salary_text: String,
    pub status: EmployeeStatus,
    pub spmt_number: String,
    /// Appointment decree (SK) number
    pub sk_number: String,
    pub sk_date: Option<NaiveDate>,
    /// TMT: date the appointment takes effect
    pub tmt_date: Option<NaiveDate>,
    /// Date the employee actually commenced duty
    pub spmt_date: Option<NaiveDate>,
}

impl Employee {
    /// Set the salary from raw input, keeping the word form in sync.
    ///
    /// Strips every non-digit character, regroups thousands, and recomputes
    /// the terbilang text. This is the only write path for either salary
    /// field, so `salary_amount` and `salary_text` cannot diverge.
    pub fn set_salary(&mut self, raw: &str) {
        self.salary_amount = terbilang::group_thousands(raw);
        self.salary_text = terbilang::salary_words(raw);
    }

    /// Apply an administrative update. Salary writes re-derive the word form.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(v) = update.nip {
            self.nip = v;
        }
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.place_of_birth {
            self.place_of_birth = v;
        }
        if let Some(v) = update.date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = update.education {
            self.education = v;
        }
        if let Some(v) = update.address {
            self.address = v;
        }
        if let Some(v) = update.position {
            self.position = v;
        }
        if let Some(v) = update.unit {
            self.unit = v;
        }
        if let Some(v) = update.placement_unit {
            self.placement_unit = v;
        }
        if let Some(v) = update.agreement_number {
            self.agreement_number = v;
        }
        if let Some(v) = update.salary_amount {
            self.set_salary(&v);
        }
        if let Some(v) = update.spmt_number {
            self.spmt_number = v;
        }
        if let Some(v) = update.sk_number {
            self.sk_number = v;
        }
        if let Some(v) = update.sk_date {
            self.sk_date = v;
        }
        if let Some(v) = update.tmt_date {
            self.tmt_date = v;
        }
        if let Some(v) = update.spmt_date {
            self.spmt_date = v;
        }
    }

    /// Apply an employee self-correction.
    ///
    /// The payload type only carries non-identity fields, so this path cannot
    /// touch NIP, position, units, numbers, dates of record, or salary.
    pub fn apply_self(&mut self, update: EmployeeSelfUpdate) {
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.place_of_birth {
            self.place_of_birth = v;
        }
        if let Some(v) = update.date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = update.education {
            self.education = v;
        }
        if let Some(v) = update.address {
            self.address = v;
        }
    }
}

/// Create employee payload (admin manual entry)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub nip: String,
    pub name: String,
    #[serde(default)]
    pub place_of_birth: String,
    pub date_of_birth: Option<NaiveDate>,
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
    /// Raw salary input; grouping and word form are derived on create
    #[serde(default)]
    pub salary_amount: String,
    #[serde(default)]
    pub spmt_number: String,
    #[serde(default)]
    pub sk_number: String,
    pub sk_date: Option<NaiveDate>,
    pub tmt_date: Option<NaiveDate>,
    pub spmt_date: Option<NaiveDate>,
}

/// Update employee payload (administrative override, any field)
///
/// Date fields use a double `Option`: outer absent = leave unchanged,
/// inner `None` = clear the date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub nip: Option<String>,
    pub name: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub education: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
    pub unit: Option<String>,
    pub placement_unit: Option<String>,
    pub agreement_number: Option<String>,
    pub salary_amount: Option<String>,
    pub spmt_number: Option<String>,
    pub sk_number: Option<String>,
    pub sk_date: Option<Option<NaiveDate>>,
    pub tmt_date: Option<Option<NaiveDate>>,
    pub spmt_date: Option<Option<NaiveDate>>,
}

/// Employee self-correction payload
///
/// Restricted to the fields an employee may fix on their own pending record.
/// Identity and administrative fields are not representable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSelfUpdate {
    pub name: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub education: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_literals() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::VerifiedByEmployee).unwrap(),
            "\"verified_by_employee\""
        );
        let parsed: EmployeeStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, EmployeeStatus::Approved);
    }

    #[test]
    fn test_status_printable() {
        assert!(!EmployeeStatus::Pending.is_printable());
        assert!(!EmployeeStatus::VerifiedByEmployee.is_printable());
        assert!(EmployeeStatus::Approved.is_printable());
    }

    #[test]
    fn test_set_salary_keeps_text_in_sync() {
        let mut emp = Employee::default();
        emp.set_salary("2500000");
        assert_eq!(emp.salary_amount, "2.500.000");
        assert_eq!(emp.salary_text, "Dua Juta Lima Ratus Ribu Rupiah");

        // Formatted input is stripped before re-deriving
        emp.set_salary("Rp 3.000.000");
        assert_eq!(emp.salary_amount, "3.000.000");
        assert_eq!(emp.salary_text, "Tiga Juta Rupiah");
    }

    #[test]
    fn test_set_salary_empty() {
        let mut emp = Employee::default();
        emp.set_salary("");
        assert_eq!(emp.salary_amount, "");
        assert_eq!(emp.salary_text, "");
    }

    #[test]
    fn test_apply_salary_rederives_words() {
        let mut emp = Employee::default();
        emp.apply(EmployeeUpdate {
            salary_amount: Some("1250000".to_string()),
            ..Default::default()
        });
        assert_eq!(emp.salary_amount, "1.250.000");
        assert_eq!(
            emp.salary_text,
            "Satu Juta Dua Ratus Lima Puluh Ribu Rupiah"
        );
    }

    #[test]
    fn test_apply_self_is_limited() {
        let mut emp = Employee {
            nip: "198501012022011001".to_string(),
            position: "Pranata Komputer Ahli Pertama".to_string(),
            ..Default::default()
        };
        emp.apply_self(EmployeeSelfUpdate {
            name: Some("Budi Santoso".to_string()),
            address: Some("Jl. Sultan Fatah No. 10, Demak".to_string()),
            ..Default::default()
        });
        assert_eq!(emp.name, "Budi Santoso");
        // identity fields untouched by construction
        assert_eq!(emp.nip, "198501012022011001");
        assert_eq!(emp.position, "Pranata Komputer Ahli Pertama");
    }

    #[test]
    fn test_wire_form_is_camel_case() {
        let emp = Employee {
            place_of_birth: "Demak".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&emp).unwrap();
        assert!(json.contains("\"placeOfBirth\":\"Demak\""));
        assert!(json.contains("\"salaryAmount\""));
    }
}
