//! # Notifications
//!
//! Short success/error messages shown after an action. Delivery is
//! fire-and-forget: a failed write to the terminal is dropped.

use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::error::ApiError;

/// How long a toast stays up in a UI that hides them.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            severity: Severity::Success,
            duration: TOAST_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            severity: Severity::Error,
            duration: TOAST_DURATION,
        }
    }
}

impl From<&ApiError> for Toast {
    fn from(err: &ApiError) -> Self {
        Toast::error(err.message.clone())
    }
}

/// Anything that can show a toast.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, toast: Toast) {
        (**self).notify(toast);
    }
}

/// Writes toasts as single prefixed lines.
#[derive(Debug)]
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        TerminalNotifier { out }
    }
}

impl TerminalNotifier<std::io::Stderr> {
    pub fn stderr() -> Self {
        TerminalNotifier::new(std::io::stderr())
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, toast: Toast) {
        let icon = match toast.severity {
            Severity::Success => "✓",
            Severity::Error => "✗",
        };
        let _ = writeln!(self.out, "{} {}", icon, toast.message);
        let _ = self.out.flush();
    }
}

/// Collects toasts in memory.
impl Notifier for Vec<Toast> {
    fn notify(&mut self, toast: Toast) {
        self.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_terminal_notifier_prefixes_severity() {
        let mut notifier = TerminalNotifier::new(Vec::new());
        notifier.notify(Toast::success("Product added successfully!"));
        notifier.notify(Toast::error("Please fill in all fields"));

        let text = String::from_utf8(notifier.out).unwrap();
        assert_eq!(
            text,
            "✓ Product added successfully!\n✗ Please fill in all fields\n"
        );
    }

    #[test]
    fn test_toast_from_api_error() {
        let toast = Toast::from(&ApiError::new(ErrorCode::DuplicateId, "taken"));
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "taken");
        assert_eq!(toast.duration, Duration::from_secs(3));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_write_failures_are_ignored() {
        let mut notifier = TerminalNotifier::new(BrokenPipe);
        notifier.notify(Toast::success("ignored"));
    }
}
