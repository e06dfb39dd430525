//! Repository layer: domain models and store ports.

pub mod employees;

pub use employees::{CredentialStore, Employee, EmployeeStatus};
