//! Error types for the Draftboard client.
//!
//! Duplicate detection errors are raised locally by the service layer before any mutating
//! request is sent. Every other error comes from the transport and is passed through to the
//! caller unchanged, never retried and never swallowed. All errors use `thiserror` for their
//! `Display` and `Error` implementations.

pub mod api;
pub mod config;
pub mod duplicate;

use thiserror::Error;

use crate::client::error::{api::ApiError, config::ConfigError, duplicate::DuplicateEntityError};

/// Main error type for the Draftboard client.
///
/// Aggregates the domain error raised by duplicate detection with the transport and
/// configuration errors so services and stores can propagate everything with `?`.
///
/// # Error Categories
/// - Duplicate entity (natural key already taken, raised before any network call)
/// - API errors (non-success HTTP status returned by the backend)
/// - Configuration errors (missing/invalid environment variables)
/// - Request errors (network failure, timeout, undecodable body)
#[derive(Error, Debug)]
pub enum Error {
    /// Another record already holds the natural key of the candidate.
    #[error(transparent)]
    DuplicateEntity(#[from] DuplicateEntityError),
    /// Backend answered with a non-success HTTP status.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request could not be sent, timed out, or the response could not be read.
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// Response body did not match the expected shape.
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
}

impl Error {
    /// Identifier of the conflicting record when this is a duplicate error
    pub fn existing_id(&self) -> Option<i32> {
        match self {
            Self::DuplicateEntity(err) => err.existing_id,
            _ => None,
        }
    }

    /// Whether the backend reported the requested resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError(ApiError::NotFound(_)))
    }
}
