//! Article API client implementation
//!
//! reqwest-backed implementation of the `ArticleApi` port. Non-success
//! responses are mapped to `ApiError::Status` so the facades can branch
//! on the status code; the message is taken from the response body when
//! it carries one.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::entities::{Article, ArticleId};
use crate::domain::ports::ArticleApi;
use crate::error::ApiError;

pub struct HttpArticleApi {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpArticleApi {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.article_api_url.clone(),
            config.article_api_token.clone(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            Err(self.status_error(status.as_u16(), response).await)
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(self.status_error(status.as_u16(), response).await)
        }
    }

    async fn status_error(&self, status: u16, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.message)
            .or_else(|| (!body.is_empty()).then_some(body));

        tracing::debug!(status, "article API returned an error");
        ApiError::Status { status, message }
    }
}

#[derive(Serialize)]
struct CreateArticleRequest<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn create(&self, title: &str, content: &str) -> Result<Article, ApiError> {
        let url = self.url("/articles");
        tracing::debug!(%url, "creating article");

        let response = self
            .request(self.http.post(&url))
            .json(&CreateArticleRequest { title, content })
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn get(&self, id: ArticleId) -> Result<Article, ApiError> {
        let url = self.url(&format!("/articles/{id}"));
        tracing::debug!(%url, "fetching article");

        let response = self.request(self.http.get(&url)).send().await?;

        self.handle_response(response).await
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        let url = self.url(&format!("/articles/{id}"));
        tracing::debug!(%url, "deleting article");

        let response = self.request(self.http.delete(&url)).send().await?;

        self.handle_empty_response(response).await
    }
}
