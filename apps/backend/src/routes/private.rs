use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::{error::AppError, extractors::CurrentEmployee};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub dni: String,
    pub employee_code: i64,
    pub is_admin: bool,
}

/// Protected endpoint that returns the caller's identity
async fn me(auth: CurrentEmployee) -> Result<HttpResponse, AppError> {
    let response = MeResponse {
        dni: auth.dni,
        employee_code: auth.employee_code,
        is_admin: auth.is_admin,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
