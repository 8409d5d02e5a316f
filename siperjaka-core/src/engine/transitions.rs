//! Workflow transition rules
//!
//! Single authority for which role may move a record between statuses.
//! Calling surfaces never re-implement these checks.
//!
//! | From                 | To                   | Role        |
//! |----------------------|----------------------|-------------|
//! | pending              | pending (field edit) | employee    |
//! | pending              | verified_by_employee | employee    |
//! | verified_by_employee | approved             | verifikator |
//! | any                  | any                  | admin       |

use shared::error::{AppError, AppResult};
use shared::models::{Actor, Employee, EmployeeStatus, Role};

/// Operations gated by the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOp {
    /// Employee corrects their own pending record
    EmployeeEdit,
    /// Employee self-certifies: pending -> verified_by_employee
    EmployeeSubmit,
    /// Verifier approves: verified_by_employee -> approved
    VerifierApprove,
    /// Admin override: any field, any status, delete
    AdminOverride,
}

impl WorkflowOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeEdit => "employee_edit",
            Self::EmployeeSubmit => "employee_submit",
            Self::VerifierApprove => "verifier_approve",
            Self::AdminOverride => "admin_override",
        }
    }
}

/// Check whether `actor` may perform `op` on `record`.
///
/// Role and ownership are checked before status, so a caller with the wrong
/// role gets a permission error even when the status would also be wrong.
pub fn authorize(op: WorkflowOp, actor: &Actor, record: &Employee) -> AppResult<()> {
    match op {
        WorkflowOp::AdminOverride => {
            if actor.role != Role::Admin {
                return Err(AppError::admin_required().with_detail("op", op.as_str()));
            }
            Ok(())
        }

        WorkflowOp::EmployeeEdit | WorkflowOp::EmployeeSubmit => {
            if !actor.owns(&record.nip) {
                return Err(AppError::permission_denied(
                    "only the owning employee may act on this record",
                )
                .with_detail("op", op.as_str()));
            }
            match record.status {
                EmployeeStatus::Pending => Ok(()),
                current => Err(AppError::illegal_transition(
                    "record left pending and is read-only to the employee",
                )
                .with_detail("op", op.as_str())
                .with_detail("currentStatus", current.as_str())),
            }
        }

        WorkflowOp::VerifierApprove => {
            if actor.role != Role::Verifikator {
                return Err(AppError::with_message(
                    shared::error::ErrorCode::RoleRequired,
                    "verifier approval requires the verifikator role",
                )
                .with_detail("op", op.as_str()));
            }
            match record.status {
                EmployeeStatus::VerifiedByEmployee => Ok(()),
                current => Err(AppError::illegal_transition(
                    "verifier approval requires employee self-certification first",
                )
                .with_detail("op", op.as_str())
                .with_detail("currentStatus", current.as_str())
                .with_detail("attemptedStatus", EmployeeStatus::Approved.as_str())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn employee_actor() -> Actor {
        Actor::new("198501012022011001", Role::Employee, "Budi Santoso")
    }

    fn verifier_actor() -> Actor {
        Actor::new("verifikator", Role::Verifikator, "Verifikator")
    }

    fn admin_actor() -> Actor {
        Actor::new("admin", Role::Admin, "Administrator")
    }

    fn record(status: EmployeeStatus) -> Employee {
        Employee {
            id: "1".to_string(),
            nip: "198501012022011001".to_string(),
            name: "Budi Santoso".to_string(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_employee_may_edit_and_submit_while_pending() {
        let rec = record(EmployeeStatus::Pending);
        let actor = employee_actor();
        assert!(authorize(WorkflowOp::EmployeeEdit, &actor, &rec).is_ok());
        assert!(authorize(WorkflowOp::EmployeeSubmit, &actor, &rec).is_ok());
    }

    #[test]
    fn test_employee_locked_out_after_pending() {
        let actor = employee_actor();
        for status in [EmployeeStatus::VerifiedByEmployee, EmployeeStatus::Approved] {
            let rec = record(status);
            let err = authorize(WorkflowOp::EmployeeEdit, &actor, &rec).unwrap_err();
            assert_eq!(err.code, ErrorCode::IllegalTransition);
            let err = authorize(WorkflowOp::EmployeeSubmit, &actor, &rec).unwrap_err();
            assert_eq!(err.code, ErrorCode::IllegalTransition);
        }
    }

    #[test]
    fn test_non_owner_employee_rejected() {
        let rec = record(EmployeeStatus::Pending);
        let other = Actor::new("199001012022011002", Role::Employee, "Lain");
        let err = authorize(WorkflowOp::EmployeeEdit, &other, &rec).unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
    }

    #[test]
    fn test_verifier_approve_requires_exact_status() {
        let actor = verifier_actor();

        let rec = record(EmployeeStatus::VerifiedByEmployee);
        assert!(authorize(WorkflowOp::VerifierApprove, &actor, &rec).is_ok());

        for status in [EmployeeStatus::Pending, EmployeeStatus::Approved] {
            let rec = record(status);
            let err = authorize(WorkflowOp::VerifierApprove, &actor, &rec).unwrap_err();
            assert_eq!(err.code, ErrorCode::IllegalTransition);
        }
    }

    #[test]
    fn test_verifier_role_checked_before_status() {
        let rec = record(EmployeeStatus::VerifiedByEmployee);
        let err = authorize(WorkflowOp::VerifierApprove, &admin_actor(), &rec).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleRequired);
    }

    #[test]
    fn test_admin_override_any_status() {
        let actor = admin_actor();
        for status in [
            EmployeeStatus::Pending,
            EmployeeStatus::VerifiedByEmployee,
            EmployeeStatus::Approved,
        ] {
            let rec = record(status);
            assert!(authorize(WorkflowOp::AdminOverride, &actor, &rec).is_ok());
        }
    }

    #[test]
    fn test_admin_override_requires_admin() {
        let rec = record(EmployeeStatus::Pending);
        let err = authorize(WorkflowOp::AdminOverride, &verifier_actor(), &rec).unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);
    }
}
