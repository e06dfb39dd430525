//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here; higher
//! layers then map `DomainError` to `AppError` via `From`. Raw driver
//! messages are redacted before they reach the log stream.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found("Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use super::map_db_err;
    use crate::errors::domain::{DomainError, InfraErrorKind};

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(sea_orm::DbErr::RecordNotFound("Empleados".to_string()));
        assert_eq!(err, DomainError::not_found("Record not found"));
    }

    #[test]
    fn connection_failure_maps_to_db_unavailable() {
        let err = map_db_err(sea_orm::DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "refused".to_string(),
        )));
        assert_eq!(
            err,
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        );
    }

    #[test]
    fn timeout_message_maps_to_timeout() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "pool timeout while acquiring connection".to_string(),
        ));
        assert_eq!(
            err,
            DomainError::infra(InfraErrorKind::Timeout, "Database timeout")
        );
    }

    #[test]
    fn other_errors_are_generic_infra() {
        let err = map_db_err(sea_orm::DbErr::Custom("syntax error".to_string()));
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::Other(_), _)
        ));
    }
}
