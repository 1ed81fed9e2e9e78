//! Mapping of gateway failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ethgate_chain::RemoteCallError;
use ethgate_core::AddressError;
use thiserror::Error;
use tracing::{debug, error};

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Address is required")]
    MissingAddress,

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error(transparent)]
    Remote(#[from] RemoteCallError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress | ApiError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            ApiError::Remote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Upstream call failed");
        } else {
            debug!(error = %self, "Rejected request");
        }
        (status, self.to_string()).into_response()
    }
}
