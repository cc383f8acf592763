//! Article delete facade
//!
//! Same shape as the create facade, with one addition: the outcome is
//! also kept in a `last_result` slot so callers that cannot await the
//! returned future can poll the most recent completion instead.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::entities::Article;
use crate::domain::ports::ArticleApi;

/// Status the article API uses for articles that no longer exist
const STATUS_NOT_FOUND: u16 = 404;

/// Command facade for deleting articles
pub struct ArticleDelete<A>
where
    A: ArticleApi,
{
    api: Arc<A>,
    last_result: Mutex<Option<String>>,
}

impl<A> ArticleDelete<A>
where
    A: ArticleApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            last_result: Mutex::new(None),
        }
    }

    /// Delete an article and describe the outcome.
    ///
    /// `last_result` is cleared when the call starts and holds the
    /// returned message once the operation settles.
    pub async fn delete(&self, article: Option<&Article>) -> String {
        self.set_last_result(None);

        let message = match article {
            Some(article) => match self.api.delete(article.id).await {
                Ok(()) => format!("article deleted: \"{}\"", article.title),
                Err(e) if e.status() == Some(STATUS_NOT_FOUND) => format!(
                    "It looks like article \"{}\" has already been deleted",
                    article.title
                ),
                Err(e) => {
                    tracing::warn!(error = %e, id = %article.id, "article delete failed");
                    format!(
                        "Unknown error trying to delete \"{}\". Please try again.",
                        article.title
                    )
                }
            },
            None => "no article to delete".to_string(),
        };

        self.set_last_result(Some(message.clone()));
        message
    }

    /// The message from the most recently settled delete, if any
    pub fn last_result(&self) -> Option<String> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_last_result(&self, message: Option<String>) {
        *self
            .last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = message;
    }
}
