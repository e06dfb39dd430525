//! Employee fixtures and credential-store doubles for integration tests

use async_trait::async_trait;
use backend::adapters::employees_mem::MemoryEmployeeStore;
use backend::errors::domain::{DomainError, InfraErrorKind};
use backend::repos::employees::{CredentialStore, Employee, EmployeeStatus};
use backend::services::credentials::VerifiedIdentity;

pub const ACTIVE_DNI: &str = "12345678";
pub const ACTIVE_PASSWORD: &str = "password123";
pub const ACTIVE_EMPLOYEE_CODE: i64 = 1001;

pub const ADMIN_DNI: &str = "87654321";
pub const ADMIN_PASSWORD: &str = "admin-secret";
pub const ADMIN_EMPLOYEE_CODE: i64 = 2002;

pub const INACTIVE_DNI: &str = "11223344";
pub const INACTIVE_PASSWORD: &str = "inactive-pass";

/// Store seeded with one active employee, one active administrator and
/// one inactive employee.
pub fn seeded_store() -> MemoryEmployeeStore {
    MemoryEmployeeStore::new()
        .with_employee(Employee {
            employee_code: ACTIVE_EMPLOYEE_CODE,
            dni: ACTIVE_DNI.to_string(),
            secret: ACTIVE_PASSWORD.to_string(),
            status: EmployeeStatus::Active,
            is_admin: false,
        })
        .with_employee(Employee {
            employee_code: ADMIN_EMPLOYEE_CODE,
            dni: ADMIN_DNI.to_string(),
            secret: ADMIN_PASSWORD.to_string(),
            status: EmployeeStatus::Active,
            is_admin: true,
        })
        .with_employee(Employee {
            employee_code: 3003,
            dni: INACTIVE_DNI.to_string(),
            secret: INACTIVE_PASSWORD.to_string(),
            status: EmployeeStatus::Inactive,
            is_admin: false,
        })
}

/// Identity matching the seeded active employee
pub fn active_identity() -> VerifiedIdentity {
    VerifiedIdentity {
        dni: ACTIVE_DNI.to_string(),
        employee_code: ACTIVE_EMPLOYEE_CODE,
        is_admin: false,
    }
}

/// Store whose lookups always fail, for StoreUnavailable coverage
pub struct FailingEmployeeStore;

#[async_trait]
impl CredentialStore for FailingEmployeeStore {
    async fn find_by_dni(&self, _dni: &str) -> Result<Option<Employee>, DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::DbUnavailable,
            "Database unavailable",
        ))
    }
}
