//! Credential verification service.
//!
//! Checks a submitted DNI/password pair against the employee credential
//! store and produces the identity claims the token issuer embeds.

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::employees::{CredentialStore, EmployeeStatus};

/// Identity attributes of a successfully verified employee.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub dni: String,
    pub employee_code: i64,
    pub is_admin: bool,
}

/// Verification failure kinds.
///
/// `UnknownIdentity` and `InvalidSecret` are distinct here for tests and
/// logs, but map to one identical 401 response at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("dni or password missing")]
    MissingCredentials,
    #[error("no employee record for that dni")]
    UnknownIdentity,
    #[error("password mismatch")]
    InvalidSecret,
    #[error("account is not active")]
    InactiveAccount,
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<CredentialError> for AppError {
    fn from(e: CredentialError) -> Self {
        match e {
            CredentialError::MissingCredentials => {
                AppError::bad_request(ErrorCode::MissingCredentials, "DNI or password missing")
            }
            CredentialError::UnknownIdentity | CredentialError::InvalidSecret => {
                AppError::invalid_credentials()
            }
            CredentialError::InactiveAccount => AppError::inactive_account(),
            CredentialError::StoreUnavailable(detail) => AppError::db_unavailable(detail),
        }
    }
}

/// Verify a DNI/password pair against the credential store.
///
/// Check order is fixed: empty input fails before the store is touched,
/// and the secret comparison runs before the status check so account
/// state is never revealed to a caller who does not hold the secret.
///
/// Stored secrets are plaintext and compared by direct equality; that is
/// the contract of the pre-existing `Empleados` schema (see DESIGN.md).
pub async fn verify_credentials(
    store: &dyn CredentialStore,
    dni: &str,
    password: &str,
) -> Result<VerifiedIdentity, CredentialError> {
    if dni.is_empty() || password.is_empty() {
        return Err(CredentialError::MissingCredentials);
    }

    let employee = store
        .find_by_dni(dni)
        .await
        .map_err(|e| {
            warn!(dni = %Redacted(dni), error = %e, "credential store lookup failed");
            match e {
                DomainError::Infra(_, detail) => CredentialError::StoreUnavailable(detail),
                other => CredentialError::StoreUnavailable(other.to_string()),
            }
        })?
        .ok_or_else(|| {
            debug!(dni = %Redacted(dni), "login rejected: unknown dni");
            CredentialError::UnknownIdentity
        })?;

    if employee.secret != password {
        debug!(dni = %Redacted(dni), "login rejected: wrong password");
        return Err(CredentialError::InvalidSecret);
    }

    if employee.status != EmployeeStatus::Active {
        warn!(
            dni = %Redacted(dni),
            status = employee.status.as_wire(),
            "login rejected: account not active"
        );
        return Err(CredentialError::InactiveAccount);
    }

    debug!(
        dni = %Redacted(dni),
        employee_code = employee.employee_code,
        "credentials verified"
    );

    Ok(VerifiedIdentity {
        dni: employee.dni,
        employee_code: employee.employee_code,
        is_admin: employee.is_admin,
    })
}
