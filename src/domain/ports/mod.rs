//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod article_api;
pub mod messenger;
pub mod storage;

pub use article_api::ArticleApi;
pub use messenger::UserMessenger;
pub use storage::{ArticleCollection, ArticleQuery};
