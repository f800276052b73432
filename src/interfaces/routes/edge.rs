use actix_cors::Cors;
use actix_web::{http::header, middleware::DefaultHeaders, web};

use crate::handlers::edge as edge_handlers;

/// Wildcard CORS for the edge surface, matching what a static host expects.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
}

/// CORS headers stamped on every edge response, errors included, whether or
/// not the request carried an `Origin`.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE"))
}

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(edge_handlers::edge_projects))
    )
    .service(
        web::resource("/projects/featured")
            .route(web::get().to(edge_handlers::edge_featured_projects))
    )
    .default_service(web::to(edge_handlers::edge_not_found));
}
