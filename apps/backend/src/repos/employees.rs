//! Employee credential records and the credential-store port.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// Account status stored per employee.
///
/// The store keeps the status as a Spanish wire string; anything other
/// than `"activo"` counts as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "activo" => Self::Active,
            _ => Self::Inactive,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Inactive => "inactivo",
        }
    }
}

/// Employee credential record as read from the store.
///
/// `secret` is the stored plaintext password; the store schema predates
/// this service and does not hash credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_code: i64,
    pub dni: String,
    pub secret: String,
    pub status: EmployeeStatus,
    pub is_admin: bool,
}

/// Read-only port to the employee credential store.
///
/// A DNI resolves to at most one record; `Ok(None)` means "unknown
/// identity", not an error.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_dni(&self, dni: &str) -> Result<Option<Employee>, DomainError>;
}
