//! In-memory article collection
//!
//! `ArticleCollection` implementation backed by a `HashMap`. Useful for
//! local development and for exercising the controller end to end
//! without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Article;
use crate::domain::ports::{ArticleCollection, ArticleQuery};
use crate::error::StorageError;

#[derive(Default)]
pub struct InMemoryArticleCollection {
    articles: RwLock<HashMap<i64, Article>>,
}

impl InMemoryArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an article
    pub fn with_article(mut self, article: Article) -> Self {
        self.articles.get_mut().insert(article.id.0, article);
        self
    }

    pub async fn insert(&self, article: Article) {
        let mut articles = self.articles.write().await;
        articles.insert(article.id.0, article);
    }
}

#[async_trait]
impl ArticleCollection for InMemoryArticleCollection {
    async fn find_one(&self, query: &ArticleQuery) -> Result<Article, StorageError> {
        let articles = self.articles.read().await;
        articles.get(&query.id).cloned().ok_or(StorageError::Missing)
    }

    async fn delete(&self, query: &ArticleQuery) -> Result<(), StorageError> {
        let mut articles = self.articles.write().await;
        match articles.remove(&query.id) {
            Some(_) => Ok(()),
            None => Err(StorageError::Missing),
        }
    }
}
