use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fdc::FdcError;

pub const DATABASE_NOT_CONFIGURED: &str = "DATABASE_URL not set (set DATABASE_URL in environment)";

pub type AppResult<T> = Result<T, AppError>;

/// Every failure a handler can produce. Mapped to a status code once, in `IntoResponse`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Config(String),

    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Upstream { .. }
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FdcError> for AppError {
    fn from(err: FdcError) -> Self {
        match err {
            FdcError::EmptyQuery => AppError::BadRequest("Missing query".into()),
            FdcError::MissingApiKey => AppError::Config(err.to_string()),
            FdcError::Status { status, .. } => AppError::Upstream {
                status: Some(status),
                message: err.to_string(),
            },
            FdcError::Transport(_) => AppError::Upstream {
                status: None,
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_status_codes() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Config(DATABASE_NOT_CONFIGURED.into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_failure_keeps_status_and_body_in_message() {
        let err: AppError = FdcError::Status {
            operation: "search",
            status: 403,
            body: "API_KEY_INVALID".into(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "FDC search failed: 403 API_KEY_INVALID");
    }

    #[test]
    fn empty_query_is_a_client_error() {
        let err: AppError = FdcError::EmptyQuery.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing query");
    }
}
