use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Failure to turn response headers into a typed record (or back).
///
/// When parsing, `name` is the short field token (e.g. `min-disk`) or, for a
/// prefixed property or metadata entry, its lower-cased key. When binding,
/// it is the header name that could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("required header field `{0}` is missing")]
    MissingField(String),
    #[error("header field `{name}` has malformed value `{value}`")]
    MalformedField { name: String, value: String },
    #[error("header field `{name}` has unknown value `{value}`")]
    UnknownEnumValue { name: String, value: String },
}

impl HeaderError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingField(name.into())
    }

    pub fn malformed(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedField {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn unknown_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Field token the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(name)
            | Self::MalformedField { name, .. }
            | Self::UnknownEnumValue { name, .. } => name,
        }
    }

    /// True for both `MalformedField` and its enum specialization.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedField { .. } | Self::UnknownEnumValue { .. }
        )
    }
}

/// Errors surfaced by the account and image APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error("failed to build request: {0}")]
    Request(#[from] axum::http::Error),
    #[error("`{0}` cannot be used as a resource id")]
    InvalidId(String),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("{method} {uri} returned {status}")]
    Status {
        method: Method,
        uri: String,
        status: StatusCode,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing error of the stub service. Keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Shortcut for 404 Not Found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

impl From<HeaderError> for AppError {
    fn from(err: HeaderError) -> Self {
        AppError::bad_request(err.to_string())
    }
}
