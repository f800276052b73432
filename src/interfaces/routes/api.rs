use actix_web::web;

use crate::handlers::{home, projects, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/home")
            .route(web::get().to(home::get_home_data))
    )
    .service(
        web::resource("/health")
            .route(web::get().to(system::health_check))
    )
    .service(
        web::resource("/projects")
            .route(web::get().to(projects::get_all_projects))
    )
    // Must precede `/projects/{project_id}`.
    .service(
        web::resource("/projects/featured")
            .route(web::get().to(projects::get_featured_projects))
    )
    .service(
        web::resource("/projects/{project_id}")
            .route(web::get().to(projects::get_project_by_id))
    )
    .default_service(web::to(projects::api_not_found));
}
