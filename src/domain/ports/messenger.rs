//! User messenger port trait

/// Fire-and-forget channel for user-facing notifications.
///
/// The component facade delegates all error signaling here instead of
/// letting failures cross its boundary.
pub trait UserMessenger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
