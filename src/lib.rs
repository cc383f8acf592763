//! Fault-tolerant CRUD facades around an unreliable article API.
//!
//! Every asynchronous collaborator (the article API, the user messenger,
//! the storage collection) is a narrow port trait, so each facade can be
//! unit-tested against hand-written spy mocks. Uses hexagonal
//! (ports & adapters) architecture for clean separation of concerns.
//!
//! The facades uphold one contract: a collaborator failure never escapes
//! un-mapped. Command facades resolve to a human-readable string, the
//! component delegates to a messenger, and the controller raises typed
//! status errors.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;



pub use app::{ArticleComponent, ArticleController, ArticleCreate, ArticleDelete};
pub use config::Config;
pub use domain::entities::{Article, ArticleId};
pub use error::{ApiError, ControllerError, StorageError};
