use actix_web::web;

pub mod auth;
pub mod health;
pub mod private;

/// Configure application routes.
///
/// `main.rs` and the test harness both register the same paths; the
/// business CRUD routers of the wider system hang their own scopes off
/// the same pattern and attach the `CurrentEmployee` guard per handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Protected routes: /api/private/**
    cfg.service(web::scope("/api/private").configure(private::configure_routes));
}
