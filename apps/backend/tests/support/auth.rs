//! JWT token generation helpers for tests

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::services::credentials::VerifiedIdentity;
use backend::state::security_config::SecurityConfig;

/// Mint an access token for the given identity
pub fn mint_test_token(identity: &VerifiedIdentity, sec: &SecurityConfig) -> String {
    mint_access_token(identity, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Mint a full Authorization header value including the "Bearer " prefix
pub fn bearer_header(identity: &VerifiedIdentity, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(identity, sec))
}

/// Mint a token that is already past its expiry (and past the
/// verifier's leeway) for expired-token scenarios
pub fn mint_expired_token(identity: &VerifiedIdentity, sec: &SecurityConfig) -> String {
    let past = SystemTime::now() - (sec.token_ttl + Duration::from_secs(120));
    mint_access_token(identity, past, sec).expect("should mint expired token successfully")
}
