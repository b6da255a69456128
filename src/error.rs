//! Error types for WDAudioLEx

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WdAudioLexError>;

#[derive(Error, Debug)]
pub enum WdAudioLexError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl WdAudioLexError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WdAudioLexError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WdAudioLexError::NotFound(_) => StatusCode::NOT_FOUND,
            WdAudioLexError::Network(_)
            | WdAudioLexError::UpstreamStatus { .. }
            | WdAudioLexError::Malformed(_) => StatusCode::BAD_GATEWAY,
            WdAudioLexError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for WdAudioLexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WdAudioLexError::Malformed(err.to_string())
        } else {
            WdAudioLexError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WdAudioLexError {
    fn from(err: serde_json::Error) -> Self {
        WdAudioLexError::Malformed(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for WdAudioLexError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
