//! Application layer
//!
//! The facades that wrap the unreliable collaborators. Each one maps
//! every collaborator failure to a user-facing string, a messenger
//! notification, or a typed status error before it reaches the caller.

pub mod article_component;
pub mod article_controller;
pub mod article_create;
pub mod article_delete;

pub use article_component::ArticleComponent;
pub use article_controller::ArticleController;
pub use article_create::ArticleCreate;
pub use article_delete::ArticleDelete;
