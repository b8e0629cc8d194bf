pub mod api_handlers;
pub mod collaboration_handlers;
pub mod committee_handlers;
pub mod project_handlers;

use actix_web::{web, HttpResponse};

use crate::errors::see_other;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");

/// Register every application route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { see_other("/collaboration") }))
        .route("/collaboration", web::get().to(collaboration_handlers::list::index))
        .route("/collaboration/meetings", web::post().to(collaboration_handlers::create::create))
        .route("/committees", web::get().to(committee_handlers::list::index))
        .route("/committees/{id}/members", web::post().to(committee_handlers::members::add))
        .route(
            "/committees/{id}/members/{member_id}/role",
            web::post().to(committee_handlers::members::change_role),
        )
        .route(
            "/committees/{id}/members/{member_id}/remove",
            web::post().to(committee_handlers::members::remove),
        )
        .route("/project", web::post().to(project_handlers::select));
    cfg.service(
        web::scope("/api")
            .route("/meetings", web::get().to(api_handlers::meetings))
            .route("/calendar", web::get().to(api_handlers::calendar))
            .route("/audit", web::get().to(api_handlers::audit)),
    );
}

/// Fallback for unmatched paths.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}
