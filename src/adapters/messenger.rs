//! Tracing-backed user messenger
//!
//! Routes user-facing notifications onto the tracing pipeline. Handy as
//! a default messenger in services that have no UI channel.

use crate::domain::ports::UserMessenger;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMessenger;

impl TracingMessenger {
    pub fn new() -> Self {
        Self
    }
}

impl UserMessenger for TracingMessenger {
    fn info(&self, message: &str) {
        tracing::info!(target: "user_messenger", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "user_messenger", "{message}");
    }
}
