pub mod calendar;
pub mod projects;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use chantier_core::ChantierError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert domain errors to HTTP responses.
pub enum AppError {
    BadRequest(String),
    Domain(ChantierError),
    Internal(anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(ChantierError::ProjectNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(ChantierError::InvalidDate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Domain(e) => e.to_string(),
            AppError::Internal(e) => e.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<ChantierError> for AppError {
    fn from(err: ChantierError) -> Self {
        AppError::Domain(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
