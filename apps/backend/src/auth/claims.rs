//! Claims embedded in backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims included in our backend-issued access tokens.
///
/// Exactly the identity attributes the credential verifier produced;
/// tokens never carry any other employee data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Employee DNI (login identifier)
    pub sub: String,
    /// Opaque employee identity handle (Empleados.cod_empleado)
    pub employee_code: i64,
    /// Administrator flag, used by handlers for coarse role gating
    pub is_admin: bool,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
