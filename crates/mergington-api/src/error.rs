//! Error types for the activities API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mergington_roster::RosterError;
use mergington_types::ErrorResponse;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The roster store rejected the operation.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The query string was missing a field or could not be parsed.
    #[error("{0}")]
    InvalidQuery(String),

    /// A path parameter could not be extracted.
    #[error("{0}")]
    InvalidPath(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Roster(RosterError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Roster(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
