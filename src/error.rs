//! API error type and its HTTP mapping.
//!
//! Every error renders as the standard envelope
//! `{"success": false, "error": <status>, "message": <text>}` so the
//! frontend can treat failures uniformly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The requested record or page does not exist.
    NotFound,
    /// The request was well-formed but missing required data.
    Unprocessable,
    /// The request cannot be served as posed (quiz parameters absent).
    BadRequest,
}

impl ApiError {
    fn status(self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Unprocessable => write!(f, "unprocessable"),
            ApiError::BadRequest => write!(f, "bad request"),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
