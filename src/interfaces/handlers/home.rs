use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_home_data(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let document = state
        .home_handler
        .load()
        .await
        .map_err(|e| e.into_fault("Failed to fetch home data", state.expose_error_details))?;

    Ok(HttpResponse::Ok().json(document))
}
