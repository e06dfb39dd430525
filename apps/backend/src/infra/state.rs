use std::sync::Arc;

use crate::adapters::employees_mem::MemoryEmployeeStore;
use crate::adapters::employees_sea::SeaEmployeeStore;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::employees::CredentialStore;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    credentials: Option<Arc<dyn CredentialStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_profile: None,
            credentials: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Inject a credential store directly, bypassing the SeaORM adapter.
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(profile) = self.db_profile {
            let conn = connect_db(profile).await?;
            let credentials = self
                .credentials
                .unwrap_or_else(|| Arc::new(SeaEmployeeStore::new(conn.clone())));
            Ok(AppState::new(conn, credentials, self.security_config))
        } else {
            let credentials = self
                .credentials
                .unwrap_or_else(|| Arc::new(MemoryEmployeeStore::new()));
            Ok(AppState::without_db(credentials, self.security_config))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
