//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use quickbite_domain::error::QuickBiteError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`QuickBiteError`] and extractor rejections to an HTTP response.
///
/// Storage failures are reported with a fixed, per-endpoint message; the
/// underlying cause is only logged. Every variant answers with an
/// `{"error": ...}` body.
pub enum ApiError {
    /// A failure reported by the menu service.
    Domain {
        error: QuickBiteError,
        fallback: &'static str,
    },
    /// The request could not be decoded (malformed JSON, wrong field types,
    /// wrong content type).
    BadRequest(String),
}

impl ApiError {
    /// Wrap `error`, reporting storage failures as `fallback`.
    #[must_use]
    pub fn new(error: QuickBiteError, fallback: &'static str) -> Self {
        Self::Domain { error, fallback }
    }

    /// Adapter for `map_err` that attaches `fallback`.
    pub fn fallback(fallback: &'static str) -> impl FnOnce(QuickBiteError) -> Self {
        move |error| Self::new(error, fallback)
    }
}

impl From<QuickBiteError> for ApiError {
    fn from(err: QuickBiteError) -> Self {
        Self::new(err, "internal server error")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Domain { error, fallback } => match error {
                QuickBiteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
                QuickBiteError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
                QuickBiteError::Storage(err) => {
                    tracing::error!(error = %err, context = fallback, "storage error");
                    (StatusCode::INTERNAL_SERVER_ERROR, fallback.to_string())
                }
            },
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
