//! Unified error types for the article facade
//!
//! This module defines error types for each layer:
//! - `ApiError`: article API client errors (structured `{status, message}` failures)
//! - `StorageError`: storage collection errors
//! - `ControllerError`: typed status errors raised by the server-side controller
//!
//! Input-validation failures of the command facades are deliberately not
//! represented here: they surface as descriptive strings, never as errors.

use thiserror::Error;

use crate::domain::entities::ArticleId;

/// Article API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// The structured status code, when the API produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Storage collection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("no document matched the query")]
    Missing,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Typed status errors raised by the server-side controller.
///
/// `status()` is the machine-readable discriminator; `Display` carries
/// the human message. Underlying storage failures are mapped exactly
/// once and never double-wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("Article with id '{id}' was not found.")]
    NotFound { id: ArticleId },

    #[error("Article with id '{id}' seems to have been updated and client and server versions do not match.")]
    VersionMismatch { id: ArticleId },

    #[error("Article with id '{id}' could not be deleted.")]
    DeleteFailed { id: ArticleId },
}

impl ControllerError {
    /// Status discriminator, stable across message wording changes
    pub fn status(&self) -> &'static str {
        match self {
            ControllerError::NotFound { .. } => "not found",
            ControllerError::VersionMismatch { .. } => "version mismatch",
            ControllerError::DeleteFailed { .. } => "delete failed",
        }
    }
}
