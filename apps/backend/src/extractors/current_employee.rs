use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::verify_access_token;
use crate::extractors::auth_token::bearer_token;
use crate::state::app_state::AppState;
use crate::AppError;

/// Authenticated caller identity extracted from a valid access token.
///
/// The guard only proves the token is genuine and unexpired; it does no
/// store lookup and no role check. Handlers that need admin-only gating
/// read `is_admin` themselves.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentEmployee {
    pub dni: String,
    pub employee_code: i64,
    pub is_admin: bool,
}

impl FromRequest for CurrentEmployee {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let claims = verify_access_token(&token, &app_state.security)?;

            Ok(CurrentEmployee {
                dni: claims.sub,
                employee_code: claims.employee_code,
                is_admin: claims.is_admin,
            })
        })
    }
}
