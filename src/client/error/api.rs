use dioxus_logger::tracing;
use reqwest::StatusCode;
use thiserror::Error;

/// Non-success HTTP status returned by the backend.
///
/// The `message` of each variant is the `error` field of the backend's JSON error body when
/// present, otherwise the raw response text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized, please login again")]
    Unauthorized,
    #[error("You do not have permission to access this resource")]
    Forbidden,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Server error ({status}), please try again later: {message}")]
    Server { status: u16, message: String },
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Classify a failed response, logging it the same way for every request.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the response
    /// - `target` - Method and path of the request, used for logging and 404 messages
    /// - `message` - Error message extracted from the response body
    pub fn from_status(status: StatusCode, target: &str, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => {
                tracing::error!("{} - {}: Unauthorized, please login again", target, status);

                Self::Unauthorized
            }
            StatusCode::FORBIDDEN => {
                tracing::error!(
                    "{} - {}: You do not have permission to access this resource",
                    target,
                    status
                );

                Self::Forbidden
            }
            StatusCode::NOT_FOUND => {
                tracing::error!("{} - {}: Resource not found", target, status);

                Self::NotFound(target.to_string())
            }
            s if s.is_server_error() => {
                tracing::error!(
                    "{} - {}: Server error, please try again later",
                    target,
                    status
                );

                Self::Server {
                    status: s.as_u16(),
                    message,
                }
            }
            s => {
                tracing::error!("{} - {}: {}", target, status, message);

                Self::Status {
                    status: s.as_u16(),
                    message,
                }
            }
        }
    }

    /// HTTP status code this error was built from
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound(_) => 404,
            Self::Server { status, .. } | Self::Status { status, .. } => *status,
        }
    }
}
