use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Question not found: {0}")]
    QuestionNotFound(i64),

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Page {0} has no questions")]
    EmptyPage(i64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Category {0} does not exist")]
    UnknownCategory(i64),

    #[error("No questions available for category {0}")]
    EmptyQuizPool(i64),

    #[error("Cannot delete question {0}: it does not exist")]
    DeleteTargetMissing(i64),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TriviaError>;

/// Client-facing classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::Unprocessable => 422,
            ErrorKind::Internal => 500,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::NotFound => "content not found",
            ErrorKind::MethodNotAllowed => "method not allowed",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::Internal => "internal server error",
        }
    }

    pub fn body(self) -> ErrorBody {
        ErrorBody {
            success: false,
            error: self.status_code(),
            message: self.message(),
        }
    }
}

impl TriviaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::MissingField(_)
            | TriviaError::UnknownCategory(_)
            | TriviaError::EmptyQuizPool(_)
            | TriviaError::InvalidRequest(_) => ErrorKind::BadRequest,
            TriviaError::QuestionNotFound(_)
            | TriviaError::CategoryNotFound(_)
            | TriviaError::EmptyPage(_) => ErrorKind::NotFound,
            TriviaError::DeleteTargetMissing(_) => ErrorKind::Unprocessable,
            TriviaError::Database(_)
            | TriviaError::Io(_)
            | TriviaError::Serialization(_)
            | TriviaError::Config(_)
            | TriviaError::Store(_) => ErrorKind::Internal,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}

/// Uniform failure envelope: `{success: false, error: <code>, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl From<&TriviaError> for ErrorBody {
    fn from(err: &TriviaError) -> Self {
        err.kind().body()
    }
}
