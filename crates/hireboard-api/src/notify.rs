//! Console notification sink for CLI sessions.

use console::style;

use hireboard_core::notify::NotificationSink;

/// Prints failure notifications to stderr as a red toast line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify_error(&self, message: &str) {
        eprintln!("  {} {}", style("✗").red().bold(), style(message).red());
    }
}
