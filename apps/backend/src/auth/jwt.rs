use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::auth::claims::Claims;
use crate::services::credentials::VerifiedIdentity;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Mint a signed access token for a verified identity.
///
/// Expiry is `now + security.token_ttl`. The token embeds exactly the
/// three identity claims plus `iat`/`exp`.
pub fn mint_access_token(
    identity: &VerifiedIdentity,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = Claims {
        sub: identity.dni.clone(),
        employee_code: identity.employee_code,
        is_admin: identity.is_admin,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify an access token and return its claims.
///
/// Every decode failure (expired, bad signature, malformed) collapses to
/// the same `Unauthorized` error; only the trace log distinguishes them.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(kind = ?e.kind(), "access token rejected");
        AppError::unauthorized()
    })
}
