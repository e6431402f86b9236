//! Host Notification Channel
//!
//! Failed operations surface to the host as short human-readable messages.
//! The host displays them transiently and clears them; the engine never
//! retries on its own.

use std::fmt;

/// Recommended transient display duration for surfaced errors
pub const ERROR_DISPLAY_MS: u64 = 5_000;

type Handler = Box<dyn Fn(&str) + Send + Sync>;

/// Callback channel delivering failure messages to the host shell
pub struct ErrorSink {
    handler: Option<Handler>,
}

impl ErrorSink {
    /// Deliver every surfaced message to the given handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            handler: Some(Box::new(handler)),
        }
    }

    /// Drop messages silently; the log still records them
    pub fn disabled() -> Self {
        Self { handler: None }
    }

    pub(crate) fn emit(&self, message: &str) {
        log::error!("{}", message);
        if let Some(handler) = &self.handler {
            handler(message);
        }
    }
}

impl Default for ErrorSink {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorSink")
            .field("enabled", &self.handler.is_some())
            .finish()
    }
}
