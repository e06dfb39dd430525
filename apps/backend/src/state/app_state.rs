use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repos::employees::CredentialStore;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Built once at startup and immutable afterwards; requests share it
/// read-only, so any instance holding the same signing secret can
/// validate any issued token.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when running against an in-memory store)
    pub db: Option<DatabaseConnection>,
    /// Employee credential store consulted at login
    pub credentials: Arc<dyn CredentialStore>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    /// Create a new AppState with a database connection
    pub fn new(
        db: DatabaseConnection,
        credentials: Arc<dyn CredentialStore>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            db: Some(db),
            credentials,
            security,
        }
    }

    /// Create a new AppState without a database connection
    pub fn without_db(credentials: Arc<dyn CredentialStore>, security: SecurityConfig) -> Self {
        Self {
            db: None,
            credentials,
            security,
        }
    }
}
