//! AppEvent - Application Event Enum
//!
//! All events the core sends to the embedding layer (notifications, refresh
//! notices, log lines). Multiplexed over a single crossbeam channel that the
//! embedding layer drains.

use chrono::{DateTime, Local};

/// Severity for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Events for core -> embedding layer communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User-facing notification (snackbar/toast material)
    Toast { message: String, is_error: bool },

    /// The collection finished a refresh
    CollectionRefreshed { count: usize },

    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },
}

impl AppEvent {
    /// Create a success toast
    pub fn toast(message: impl Into<String>) -> Self {
        Self::Toast { message: message.into(), is_error: false }
    }

    /// Create a failure toast
    pub fn toast_error(message: impl Into<String>) -> Self {
        Self::Toast { message: message.into(), is_error: true }
    }

    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}

/// Sender half of the application event channel.
///
/// The channel is unbounded; a send can only fail when the receiver is gone,
/// in which case the event is dropped silently.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: crossbeam_channel::Sender<AppEvent>,
}

impl EventSender {
    /// Create a connected sender/receiver pair
    pub fn channel() -> (Self, crossbeam_channel::Receiver<AppEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }

    pub fn send(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}
