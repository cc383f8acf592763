//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod memory;
pub mod messenger;

pub use http::HttpArticleApi;
pub use memory::InMemoryArticleCollection;
pub use messenger::TracingMessenger;
