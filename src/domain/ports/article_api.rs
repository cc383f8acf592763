//! Article API port trait
//!
//! Defines the interface for the remote article service. The service is
//! unreliable by contract: every operation may fail with a structured
//! status code, and the facades in `app` own the mapping of those
//! failures to user-facing messages.

use async_trait::async_trait;

use crate::domain::entities::{Article, ArticleId};
use crate::error::ApiError;

/// Asynchronous article API consumed by the facades
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// Create an article from a title and content
    async fn create(&self, title: &str, content: &str) -> Result<Article, ApiError>;

    /// Fetch an article by id
    async fn get(&self, id: ArticleId) -> Result<Article, ApiError>;

    /// Delete an article by id
    async fn delete(&self, id: ArticleId) -> Result<(), ApiError>;
}
