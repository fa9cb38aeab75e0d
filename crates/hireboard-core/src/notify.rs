//! Notification port for surfacing failures to the user.

/// Presentation-layer mechanism that shows errors to the user
/// (toast, status line, stderr...).
///
/// Fire-and-forget: implementations must not block and cannot fail.
pub trait NotificationSink: Send + Sync {
    fn notify_error(&self, message: &str);
}
