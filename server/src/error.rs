//! Centralized translation of domain errors into HTTP responses.
//!
//! # Design
//! Handlers never build error responses inline; they return an [`ApiError`]
//! and every endpoint shares the one body shape produced by the
//! [`IntoResponse`] impl here. `NotFound` gets a dedicated kind because it
//! is the only absence the API distinguishes; everything else, malformed
//! request bodies included, collapses into `Internal` with a fixed message.
//! The underlying cause is logged where it occurs, not echoed to the
//! caller.

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The two error outcomes the API surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The requested id has no matching record.
    #[error("Todo not found")]
    NotFound,

    /// Any other failure, surfaced with a generic message.
    #[error("An unexpected error occurred")]
    Internal,
}

/// A domain error bound to the request it occurred on.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    request_description: String,
}

impl ApiError {
    pub fn not_found(uri: &Uri) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            request_description: describe(uri),
        }
    }

    pub fn internal(uri: &Uri) -> Self {
        Self {
            kind: ErrorKind::Internal,
            request_description: describe(uri),
        }
    }

    fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned on every failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    timestamp: DateTime<Utc>,
    message: String,
    request_description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            timestamp: Utc::now(),
            message: self.kind.to_string(),
            request_description: self.request_description,
        };
        (status, Json(body)).into_response()
    }
}

fn describe(uri: &Uri) -> String {
    format!("uri={}", uri.path())
}
