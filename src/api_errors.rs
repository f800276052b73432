use derive_more::Display;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

use crate::errors::AppError;

/// Errors of the edge surface, rendered as `{"error": ...}` bodies.
#[derive(Debug, Display)]
pub enum EdgeError {
    #[display("Not found")]
    NotFound,

    #[display("{}", _0)]
    Fault(String),
}

impl EdgeError {
    pub fn fault(message: &str, cause: AppError) -> Self {
        tracing::error!("{}: {}", message, cause);
        EdgeError::Fault(message.to_string())
    }
}

impl ResponseError for EdgeError {
    fn status_code(&self) -> StatusCode {
        match self {
            EdgeError::NotFound => StatusCode::NOT_FOUND,
            EdgeError::Fault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            EdgeError::NotFound => HttpResponse::NotFound().json(json!({
                "error": self.to_string()
            })),
            EdgeError::Fault(_) => HttpResponse::InternalServerError().json(json!({
                "error": self.to_string()
            })),
        }
    }
}
