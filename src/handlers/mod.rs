pub mod consistency;
pub mod dashboard;
pub mod figures;

use actix_web::{web, HttpResponse};

/// Registers every dashboard route. Static files and the 404 fallback are
/// added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/dashboard", web::get().to(dashboard::index))
        .route("/api/figures", web::get().to(figures::list))
        .route("/api/figures/{id}", web::get().to(figures::show))
        .route("/api/consistency", web::get().to(consistency::report));
}

async fn root_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
