use crate::domain::ports::{Notification, NotificationLevel, Notifier};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use tracing::{error, info};

/// Writes each notification as one line to a writer (stderr by default).
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notification: Notification) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let line = match &notification.detail {
            Some(detail) => format!(
                "[{}] {}: {}",
                notification.level, notification.title, detail
            ),
            None => format!("[{}] {}", notification.level, notification.title),
        };
        // Write failures are logged, never propagated.
        if let Err(e) = writeln!(out, "{line}") {
            error!(error = %e, "failed to write notification");
        }
    }
}

/// Emits notifications as log events only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                info!(title = %notification.title, "notification")
            }
            NotificationLevel::Error => {
                error!(title = %notification.title, detail = ?notification.detail, "notification")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_notifier_formats_lines() {
        let notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify(Notification::success("Order placed"));
        notifier.notify(Notification::error("Order could not be placed", "HTTP 500"));

        let output = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            output,
            "[success] Order placed\n[error] Order could not be placed: HTTP 500\n"
        );
    }
}
