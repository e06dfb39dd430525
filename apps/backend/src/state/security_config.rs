use std::env;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Default access-token TTL: 5 hours.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(5 * 60 * 60);

/// Configuration for JWT security settings.
///
/// Loaded once at startup and injected into both the token issuer and
/// the token guard; never read from the environment at request time.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Access-token time-to-live
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret and default TTL
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Load the security configuration from the process environment.
    ///
    /// `BACKEND_JWT_SECRET` is required and must be non-empty;
    /// `BACKEND_TOKEN_TTL_SECS` is optional (default 18000 = 5h). Any
    /// violation is a fatal configuration error: the process must not
    /// serve traffic without a usable signing secret.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("BACKEND_JWT_SECRET")
            .map_err(|_| AppError::config("BACKEND_JWT_SECRET must be set"))?;
        if secret.trim().is_empty() {
            return Err(AppError::config("BACKEND_JWT_SECRET must not be empty"));
        }

        let token_ttl = match env::var("BACKEND_TOKEN_TTL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    AppError::config(format!(
                        "BACKEND_TOKEN_TTL_SECS must be a positive integer, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::config("BACKEND_TOKEN_TTL_SECS must not be zero"));
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        Ok(Self::new(secret.into_bytes()).with_token_ttl(token_ttl))
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
