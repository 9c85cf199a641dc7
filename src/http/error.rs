//! Error type for the HTTP adapter.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::service::ServiceError;

/// Everything a request can fail with, before or inside the service.
#[derive(Debug)]
pub enum ApiError {
    /// The id segment of the path is not an integer.
    MalformedPath,
    /// The request body is not a valid sentence object.
    MalformedBody(String),
    /// The path exists but not for this method.
    MethodNotAllowed,
    /// The service rejected the operation.
    Service(ServiceError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedPath => write!(f, "无效的ID"),
            ApiError::MalformedBody(reason) => write!(f, "无效的请求数据: {}", reason),
            ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
            ApiError::Service(ServiceError::Store(_)) => write!(f, "服务器内部错误"),
            ApiError::Service(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Service(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPath | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Plain-text body naming the condition.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Service(ServiceError::Store(e)) = &self {
            tracing::error!(error = %e, "request failed on store");
        }
        (self.status(), self.to_string()).into_response()
    }
}
