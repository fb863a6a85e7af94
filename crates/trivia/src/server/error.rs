use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};
use triviaapp::error::{ErrorKind, TriviaError};

/// Failure returned by handlers, rendered as
/// `{"success": false, "error": <code>, "message": <text>}`.
#[derive(Debug)]
pub enum ApiError {
    /// A failure from the question bank.
    Trivia(TriviaError),
    /// A transport-level failure: bad JSON, unknown route, wrong method.
    Kind(ErrorKind),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Trivia(err) => err.kind(),
            ApiError::Kind(kind) => *kind,
        }
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        ApiError::Trivia(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        if let ApiError::Trivia(err) = &self {
            if err.is_internal() {
                error!(error = %err, "request failed");
            } else {
                warn!(error = %err, "request rejected");
            }
        }
        let status = StatusCode::from_u16(kind.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(kind.body())).into_response()
    }
}
