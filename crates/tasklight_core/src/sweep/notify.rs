//! Notification channel capability.
//!
//! # Responsibility
//! - Define the single-operation notifier interface injected into the
//!   sweeper.
//! - Provide the terminal-backed implementations.
//!
//! # Invariants
//! - The fallback path is an alternate implementation of the same
//!   capability, not a branch inside sweep logic.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// Error raised when a notification channel cannot deliver.
#[derive(Debug)]
pub enum NotifyError {
    /// The channel is not usable in this session (permission or
    /// environment).
    ChannelUnavailable(String),
    /// Delivery failed while writing to the channel.
    Io(std::io::Error),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelUnavailable(reason) => {
                write!(f, "notification channel unavailable: {reason}")
            }
            Self::Io(err) => write!(f, "notification delivery failed: {err}"),
        }
    }
}

impl Error for NotifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ChannelUnavailable(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for NotifyError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Single-operation notification capability.
///
/// The sweeper only ever calls `notify`; which channel backs it is the
/// caller's choice.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Primary terminal channel: terminal bell plus a banner on stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "\u{7}*** {title} ***")?;
        writeln!(stderr, "    {body}")?;
        Ok(())
    }
}

/// Fallback channel: a plain one-line alert on stderr.
///
/// Mirrors the blocking text alert used when richer notifications are
/// not available; kept deliberately unable to fail on formatting.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "Reminder ({title}): {body}")?;
        Ok(())
    }
}
