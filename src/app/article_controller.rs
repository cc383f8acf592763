//! Article controller
//!
//! Server-side counterpart of the command facades: wraps the storage
//! collection and maps low-level failures to typed status errors. Every
//! failure path is `Err` with a `ControllerError`; the controller never
//! resolves with an error-shaped value and never lets a raw storage
//! error escape.

use std::sync::Arc;

use crate::domain::entities::{Article, ArticleId};
use crate::domain::ports::{ArticleCollection, ArticleQuery};
use crate::error::ControllerError;

pub struct ArticleController<C>
where
    C: ArticleCollection,
{
    collection: Arc<C>,
}

impl<C> ArticleController<C>
where
    C: ArticleCollection,
{
    pub fn new(collection: Arc<C>) -> Self {
        Self { collection }
    }

    /// Look up an article. Any lookup failure surfaces as `NotFound`.
    pub async fn get(&self, id: ArticleId) -> Result<Article, ControllerError> {
        self.collection
            .find_one(&ArticleQuery { id: id.0 })
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, %id, "article lookup failed");
                ControllerError::NotFound { id }
            })
    }

    /// Delete an article, guarded by an optimistic-concurrency check.
    ///
    /// The stored version token must equal the caller-supplied one or
    /// the delete is refused without touching storage. Errors already
    /// carrying a status (`NotFound`, `VersionMismatch`) pass through
    /// unchanged; only a raw storage failure on the delete itself
    /// becomes `DeleteFailed`.
    pub async fn delete(&self, id: ArticleId, expected_version: &str) -> Result<(), ControllerError> {
        let article = self.get(id).await?;

        if !article.version_matches(expected_version) {
            tracing::warn!(%id, expected_version, "version mismatch, delete refused");
            return Err(ControllerError::VersionMismatch { id });
        }

        self.collection
            .delete(&ArticleQuery { id: id.0 })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, %id, "storage delete failed");
                ControllerError::DeleteFailed { id }
            })
    }
}
