use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{web, HttpResponse, ResponseError, cookie::Key};

use crate::errors::AppError;
use crate::handlers::poll_handlers;

/// Poll routes. Every handler takes the question id from the path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(poll_handlers::index))
        .route("/detail/{id}", web::get().to(poll_handlers::detail))
        .route("/results/{id}", web::get().to(poll_handlers::results))
        .route("/vote/{id}", web::post().to(poll_handlers::vote));
}

/// Fallback for unmatched paths (register with `default_service`).
pub async fn not_found() -> HttpResponse {
    AppError::NotFound.error_response()
}

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}
