use actix_web::web;

use crate::constants::{API_PREFIX, EDGE_API_PREFIX};

mod api;
mod edge;
pub mod spa;

/// Registers the JSON API and the edge surface. Static assets are mounted
/// separately through [`spa::serve_from`] because they must come last.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(EDGE_API_PREFIX)
            .configure(edge::config_routes)
            .wrap(edge::cors_headers())
            .wrap(edge::cors())
    );

    cfg.service(
        web::scope(API_PREFIX)
            .configure(api::config_routes)
    );
}
