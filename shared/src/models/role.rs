//! Role Model

use serde::{Deserialize, Serialize};

/// Access roles
///
/// Authentication is external; the engine only checks which of the three
/// roles a caller arrives with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    Verifikator,
}

/// Authenticated caller identity
///
/// For employees, `username` is the NIP (it doubles as the login credential).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub username: String,
    pub role: Role,
    pub name: String,
}

impl Actor {
    pub fn new(username: impl Into<String>, role: Role, name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role,
            name: name.into(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this actor is the employee who owns the record with the given NIP
    #[inline]
    pub fn owns(&self, nip: &str) -> bool {
        self.role == Role::Employee && self.username == nip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Verifikator).unwrap(),
            "\"verifikator\""
        );
    }

    #[test]
    fn test_ownership() {
        let actor = Actor::new("198501012022011001", Role::Employee, "Budi Santoso");
        assert!(actor.owns("198501012022011001"));
        assert!(!actor.owns("198501012022011002"));

        let admin = Actor::new("admin", Role::Admin, "Administrator");
        assert!(!admin.owns("198501012022011001"));
    }
}
