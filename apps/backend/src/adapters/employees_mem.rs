//! In-memory credential store.
//!
//! Used by the state builder when no database profile is configured,
//! and by tests that need a deterministic store without MySQL.

use async_trait::async_trait;

use crate::errors::domain::DomainError;
use crate::repos::employees::{CredentialStore, Employee};

#[derive(Debug, Default, Clone)]
pub struct MemoryEmployeeStore {
    employees: Vec<Employee>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }
}

#[async_trait]
impl CredentialStore for MemoryEmployeeStore {
    async fn find_by_dni(&self, dni: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self.employees.iter().find(|e| e.dni == dni).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryEmployeeStore;
    use crate::repos::employees::{CredentialStore, Employee, EmployeeStatus};

    fn sample() -> Employee {
        Employee {
            employee_code: 1001,
            dni: "12345678".to_string(),
            secret: "password123".to_string(),
            status: EmployeeStatus::Active,
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn finds_seeded_employee() {
        let store = MemoryEmployeeStore::new().with_employee(sample());
        let found = store.find_by_dni("12345678").await.unwrap();
        assert_eq!(found, Some(sample()));
    }

    #[tokio::test]
    async fn unknown_dni_is_none() {
        let store = MemoryEmployeeStore::new().with_employee(sample());
        assert_eq!(store.find_by_dni("00000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_store_is_none() {
        let store = MemoryEmployeeStore::new();
        assert_eq!(store.find_by_dni("12345678").await.unwrap(), None);
    }
}
