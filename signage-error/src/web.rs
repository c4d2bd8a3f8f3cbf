use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::SignageError;

/// Errors surfaced at the HTTP boundary.
///
/// Validation and internal failures are reported as JSON bodies of the form
/// `{"error": "..."}`; authentication and not-found failures are plain text,
/// matching what display devices and the admin panel expect.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalError(String),
    #[error("MultipartError: `{0}`")]
    MultipartError(String),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<SignageError> for WebError {
    fn from(e: SignageError) -> Self {
        match e {
            SignageError::InvalidScreenId(id) => {
                WebError::BadRequest(format!("Invalid screen id: {id} (expected 1-5)"))
            }
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl From<actix_multipart::MultipartError> for WebError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        WebError::MultipartError(e.to_string())
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        match self {
            WebError::Unauthorized(msg) => HttpResponse::Unauthorized().body(msg.clone()),
            WebError::NotFound(msg) => HttpResponse::NotFound().body(msg.clone()),
            WebError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            WebError::InternalError(msg) => {
                HttpResponse::InternalServerError().json(json!({ "error": msg }))
            }
            WebError::MultipartError(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
        }
    }
}
