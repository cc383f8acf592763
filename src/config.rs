use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote article API
    pub article_api_url: String,
    /// Optional bearer token for the article API
    pub article_api_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            article_api_url: env::var("ARTICLE_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            article_api_token: env::var("ARTICLE_API_TOKEN").ok(),
        }
    }
}
