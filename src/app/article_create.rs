//! Article create facade
//!
//! Validates input, issues a single `create` call against the article
//! API, and maps the outcome to a human-readable string. Nothing is
//! retried and no error crosses the facade boundary.

use std::sync::Arc;

use crate::domain::ports::ArticleApi;

/// Status the article API uses for duplicate titles
const STATUS_CONFLICT: u16 = 409;

/// Command facade for creating articles
pub struct ArticleCreate<A>
where
    A: ArticleApi,
{
    api: Arc<A>,
}

impl<A> ArticleCreate<A>
where
    A: ArticleApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Create an article and describe the outcome.
    ///
    /// Missing fields short-circuit without touching the API; the
    /// returned string echoes exactly what was received, with absent
    /// values rendered literally as `undefined`.
    pub async fn create(&self, title: Option<&str>, content: Option<&str>) -> String {
        let (title, content) = match (title, content) {
            (Some(title), Some(content)) => (title, content),
            _ => {
                return format!(
                    "expected string title and content but received title: \"{}\" content: \"{}\"",
                    field_or_undefined(title),
                    field_or_undefined(content)
                );
            }
        };

        match self.api.create(title, content).await {
            Ok(_) => format!("article created: \"{title}\" with content \"{content}\""),
            Err(e) if e.status() == Some(STATUS_CONFLICT) => {
                format!("it appears that an article with that title \"{title}\" already exists")
            }
            Err(e) => {
                tracing::warn!(error = %e, "article create failed");
                format!("failed creating article {title} - please try again later")
            }
        }
    }
}

fn field_or_undefined(value: Option<&str>) -> &str {
    value.unwrap_or("undefined")
}
