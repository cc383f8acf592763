//! Storage collection port trait
//!
//! Abstracts the server-side article collection the controller wraps.

use async_trait::async_trait;

use crate::domain::entities::Article;
use crate::error::StorageError;

/// Lookup key for collection operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleQuery {
    pub id: i64,
}

/// Server-side article collection
#[async_trait]
pub trait ArticleCollection: Send + Sync {
    /// Find a single article matching the query
    async fn find_one(&self, query: &ArticleQuery) -> Result<Article, StorageError>;

    /// Delete the article matching the query
    async fn delete(&self, query: &ArticleQuery) -> Result<(), StorageError>;
}
