//! Typed errors and HTTP mapping.
//!
//! Each variant carries already-translated user-facing text; rendering to the
//! response envelope never needs the translator. Database failures log the
//! detail and surface a generic 500 message.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request content type is not JSON (406).
    #[error("{0}")]
    NotAcceptable(String),
    /// Request body present but not parseable as JSON (400).
    #[error("{0}")]
    BadRequest(String),
    /// No record with the requested id (404).
    #[error("{0}")]
    NotFound(String),
    /// One or more field rules violated (422). The list is exhaustive and
    /// de-duplicated, never empty.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotAcceptable(m) => (StatusCode::NOT_ACCEPTABLE, vec![m]),
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, vec![m]),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, vec![m]),
            AppError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, errors),
            AppError::Db(e) => {
                tracing::error!(error = %e, "persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };
        let body = Envelope::<()> {
            status_code: status.as_u16(),
            message,
            data: None,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422_with_full_list() {
        let resp = AppError::Validation(vec!["a".into(), "b".into()]).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn db_error_maps_to_500() {
        let resp = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
