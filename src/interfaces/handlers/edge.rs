use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{api_errors::EdgeError, AppState};

#[instrument(skip(state))]
pub async fn edge_projects(state: web::Data<AppState>) -> Result<impl Responder, EdgeError> {
    let projects = state
        .project_handler
        .list_projects()
        .await
        .map_err(|e| EdgeError::fault("Failed to fetch projects", e))?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn edge_featured_projects(state: web::Data<AppState>) -> Result<impl Responder, EdgeError> {
    let projects = state
        .project_handler
        .list_featured_projects()
        .await
        .map_err(|e| EdgeError::fault("Failed to fetch featured projects", e))?;

    Ok(HttpResponse::Ok().json(projects))
}

pub async fn edge_not_found() -> Result<HttpResponse, EdgeError> {
    Err(EdgeError::NotFound)
}
