//! Mock implementations of port traits
//!
//! Spy-style mocks: every call is recorded with its arguments, and the
//! outcome of each operation is configured up front. `ApiError` is not
//! `Clone` (it can wrap a transport error), so failures are kept in a
//! cloneable shape and rebuilt per call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::entities::{Article, ArticleId};
use crate::domain::ports::{ArticleApi, ArticleCollection, ArticleQuery, UserMessenger};
use crate::error::{ApiError, StorageError};

/// Cloneable stand-in for an `ApiError`
#[derive(Debug, Clone)]
enum MockFailure {
    Status { status: u16, message: Option<String> },
    Other(String),
}

impl MockFailure {
    fn to_api_error(&self) -> ApiError {
        match self {
            MockFailure::Status { status, message } => ApiError::Status {
                status: *status,
                message: message.clone(),
            },
            MockFailure::Other(message) => ApiError::Deserialization(message.clone()),
        }
    }

    fn from_api_error(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, message } => MockFailure::Status { status, message },
            other => MockFailure::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
enum Outcome<T> {
    Ok(T),
    Err(MockFailure),
}

impl<T: Clone> Outcome<T> {
    fn to_result(&self) -> Result<T, ApiError> {
        match self {
            Outcome::Ok(value) => Ok(value.clone()),
            Outcome::Err(failure) => Err(failure.to_api_error()),
        }
    }
}

fn unconfigured<T>(operation: &str) -> Outcome<T> {
    Outcome::Err(MockFailure::Other(format!(
        "no outcome configured for {operation}"
    )))
}

// ============================================================================
// Article API mock
// ============================================================================

pub struct MockArticleApi {
    create_outcome: Outcome<Article>,
    get_outcome: Outcome<Article>,
    delete_outcome: Outcome<()>,
    get_gate: Option<Arc<Notify>>,
    create_calls: Mutex<Vec<(String, String)>>,
    get_calls: Mutex<Vec<ArticleId>>,
    delete_calls: Mutex<Vec<ArticleId>>,
}

impl MockArticleApi {
    pub fn new() -> Self {
        Self {
            create_outcome: unconfigured("create"),
            get_outcome: unconfigured("get"),
            delete_outcome: unconfigured("delete"),
            get_gate: None,
            create_calls: Mutex::new(Vec::new()),
            get_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
        }
    }

    /// `create` resolves with the given article
    pub fn with_create_article(mut self, article: Article) -> Self {
        self.create_outcome = Outcome::Ok(article);
        self
    }

    /// `create` rejects with a structured status failure
    pub fn with_create_failure(mut self, status: u16, message: Option<&str>) -> Self {
        self.create_outcome = Outcome::Err(MockFailure::Status {
            status,
            message: message.map(str::to_string),
        });
        self
    }

    /// `create` rejects with an arbitrary API error
    pub fn with_create_error(mut self, err: ApiError) -> Self {
        self.create_outcome = Outcome::Err(MockFailure::from_api_error(err));
        self
    }

    /// `get` resolves with the given article
    pub fn with_article(mut self, article: Article) -> Self {
        self.get_outcome = Outcome::Ok(article);
        self
    }

    /// `get` rejects with a structured status failure
    pub fn with_get_failure(mut self, status: u16, message: Option<&str>) -> Self {
        self.get_outcome = Outcome::Err(MockFailure::Status {
            status,
            message: message.map(str::to_string),
        });
        self
    }

    /// `delete` resolves
    pub fn with_delete_ok(mut self) -> Self {
        self.delete_outcome = Outcome::Ok(());
        self
    }

    /// `delete` rejects with a structured status failure
    pub fn with_delete_failure(mut self, status: u16, message: Option<&str>) -> Self {
        self.delete_outcome = Outcome::Err(MockFailure::Status {
            status,
            message: message.map(str::to_string),
        });
        self
    }

    /// Hold every `get` until the gate is notified, so tests can observe
    /// a component mid-flight
    pub fn with_gated_get(mut self, gate: Arc<Notify>) -> Self {
        self.get_gate = Some(gate);
        self
    }

    pub fn create_calls(&self) -> Vec<(String, String)> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn get_calls(&self) -> Vec<ArticleId> {
        self.get_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<ArticleId> {
        self.delete_calls.lock().unwrap().clone()
    }
}

impl Default for MockArticleApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleApi for MockArticleApi {
    async fn create(&self, title: &str, content: &str) -> Result<Article, ApiError> {
        self.create_calls
            .lock()
            .unwrap()
            .push((title.to_string(), content.to_string()));
        self.create_outcome.to_result()
    }

    async fn get(&self, id: ArticleId) -> Result<Article, ApiError> {
        self.get_calls.lock().unwrap().push(id);
        if let Some(gate) = &self.get_gate {
            gate.notified().await;
        }
        self.get_outcome.to_result()
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        self.delete_calls.lock().unwrap().push(id);
        self.delete_outcome.to_result()
    }
}

// ============================================================================
// Messenger spy
// ============================================================================

#[derive(Default)]
pub struct SpyMessenger {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl SpyMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl UserMessenger for SpyMessenger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

// ============================================================================
// Storage collection mock
// ============================================================================

pub struct MockArticleCollection {
    find_one_result: Result<Article, StorageError>,
    delete_result: Result<(), StorageError>,
    find_one_calls: Mutex<Vec<ArticleQuery>>,
    delete_calls: Mutex<Vec<ArticleQuery>>,
}

impl MockArticleCollection {
    pub fn new() -> Self {
        Self {
            find_one_result: Err(StorageError::Missing),
            delete_result: Ok(()),
            find_one_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
        }
    }

    /// `find_one` resolves with the given article
    pub fn with_article(mut self, article: Article) -> Self {
        self.find_one_result = Ok(article);
        self
    }

    /// `find_one` fails with the given storage error
    pub fn with_find_one_failure(mut self, err: StorageError) -> Self {
        self.find_one_result = Err(err);
        self
    }

    /// `delete` fails with the given storage error
    pub fn with_delete_failure(mut self, err: StorageError) -> Self {
        self.delete_result = Err(err);
        self
    }

    pub fn find_one_calls(&self) -> Vec<ArticleQuery> {
        self.find_one_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<ArticleQuery> {
        self.delete_calls.lock().unwrap().clone()
    }
}

impl Default for MockArticleCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleCollection for MockArticleCollection {
    async fn find_one(&self, query: &ArticleQuery) -> Result<Article, StorageError> {
        self.find_one_calls.lock().unwrap().push(*query);
        self.find_one_result.clone()
    }

    async fn delete(&self, query: &ArticleQuery) -> Result<(), StorageError> {
        self.delete_calls.lock().unwrap().push(*query);
        self.delete_result.clone()
    }
}
