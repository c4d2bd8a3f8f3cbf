pub mod web;

use config::ConfigError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

pub type SignageResult<T, E = SignageError> = anyhow::Result<T, E>;
pub type WebResult<T, E = web::WebError> = anyhow::Result<T, E>;

#[derive(Error, Debug)]
pub enum SignageError {
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("Template error: {0}")]
    TemplateError(String),
    #[error("Invalid screen id: {0} (expected 1-5)")]
    InvalidScreenId(i64),
}

impl From<String> for SignageError {
    #[inline]
    fn from(e: String) -> Self {
        SignageError::Msg(e)
    }
}

impl From<&str> for SignageError {
    #[inline]
    fn from(e: &str) -> Self {
        SignageError::Msg(e.to_string())
    }
}

impl From<handlebars::RenderError> for SignageError {
    #[inline]
    fn from(e: handlebars::RenderError) -> Self {
        SignageError::TemplateError(e.to_string())
    }
}

impl From<handlebars::TemplateError> for SignageError {
    #[inline]
    fn from(e: handlebars::TemplateError) -> Self {
        SignageError::TemplateError(e.to_string())
    }
}
