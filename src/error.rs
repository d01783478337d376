//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    /// Every rule violation, in the order the validator reported them.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    /// Body could not be read or parsed; keeps the extractor's status (400, 413, 422).
    #[error("{message}")]
    Body { status: StatusCode, message: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bug_not_found() -> Self {
        AppError::NotFound("Bug not found".into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Body { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(MessageBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_in_order() {
        let err = AppError::Validation(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "first, second");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::bug_not_found();
        assert_eq!(err.to_string(), "Bug not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn body_rejection_keeps_its_status() {
        let err = AppError::Body {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "Failed to buffer the request body".into(),
        };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Failed to buffer the request body");
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let res = AppError::Internal("state lock".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
