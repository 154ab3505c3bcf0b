//! HTTP error mapping for the assist endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::error::AssistError;
use crate::strings::messages;

/// Body of every non-2xx answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    MissingPrompt,
    InvalidBody(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPrompt | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn texts(&self) -> (&'static str, &'static str) {
        match self {
            Self::MethodNotAllowed => messages::METHOD_NOT_ALLOWED,
            Self::MissingPrompt => messages::MISSING_PROMPT,
            Self::InvalidBody(_) => messages::INVALID_BODY,
            Self::Internal(_) => messages::INTERNAL_ERROR,
        }
    }
}

impl From<AssistError> for ApiError {
    fn from(err: AssistError) -> Self {
        match err {
            AssistError::InvalidRequest(_) => Self::MissingPrompt,
            AssistError::Internal(detail) => Self::Internal(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidBody(detail) => tracing::warn!("Rejected request body: {}", detail),
            // Details stay in the log; the caller only gets the generic apology.
            Self::Internal(detail) => tracing::error!("Internal error: {}", detail),
            _ => {}
        }
        let (error, message) = self.texts();
        let body = ErrorBody {
            success: false,
            error: error.to_string(),
            message: message.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
