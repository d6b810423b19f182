//! Error types for the auction handlers.

use crate::handlers::common::ApiEnvelope;
use crate::source::SourceError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Creates an envelope error response with the given status code.
fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(ApiEnvelope::<()>::failure(message))).into_response()
}

/// Macro to implement IntoResponse for error types with status code mapping.
macro_rules! impl_error_response {
    ($error_type:ty, $($variant:pat => $status:ident),+ $(,)?) => {
        impl IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                let status = match &self {
                    $($variant => StatusCode::$status,)+
                };
                error_response(status, self.to_string())
            }
        }
    };
}

#[derive(Debug, Error)]
pub enum AuctionsError {
    #[error("Auction with ID {0} not found")]
    NotFound(u64),

    #[error("No auction details found")]
    NoDetails,

    #[error("Internal server error: {0}")]
    Source(#[from] SourceError),
}

impl_error_response!(AuctionsError,
    AuctionsError::NotFound(_) => NOT_FOUND,
    AuctionsError::NoDetails => NOT_FOUND,
    _ => INTERNAL_SERVER_ERROR
);
