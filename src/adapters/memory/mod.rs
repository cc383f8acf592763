//! In-memory storage adapter

pub mod collection;

pub use collection::InMemoryArticleCollection;
