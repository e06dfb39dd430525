use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::services::credentials::verify_credentials;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Verify the submitted credentials and mint an access token.
///
/// The token embeds the caller's identity claims; they are not echoed
/// in the response body.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let identity =
        verify_credentials(app_state.credentials.as_ref(), &req.dni, &req.password).await?;

    let token = mint_access_token(&identity, SystemTime::now(), &app_state.security)?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
