use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_all_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state
        .project_handler
        .list_projects()
        .await
        .map_err(|e| e.into_fault("Failed to fetch projects", state.expose_error_details))?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state
        .project_handler
        .list_featured_projects()
        .await
        .map_err(|e| e.into_fault("Failed to fetch featured projects", state.expose_error_details))?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .get_project(&project_id)
        .await
        .map_err(|e| e.into_fault("Failed to fetch project", state.expose_error_details))?;

    Ok(HttpResponse::Ok().json(project))
}

/// Fallback for unmatched `/api` paths.
pub async fn api_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Not found".to_string()))
}
