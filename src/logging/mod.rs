//! Observational logging for flows and navigation.
//!
//! All output goes through `tracing`. A process-wide switch gates the
//! default logger; it starts disabled and never influences control flow.

mod subscriber;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::navigation::ScreenHandle;

pub use subscriber::init_tracing;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn default flow/navigation logging on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether default flow/navigation logging is currently on.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Logger collaborator injected through an [`Environment`](crate::environment::Environment).
pub trait FlowLogger: Send + Sync {
    fn log(&self, message: &str);

    fn log_error(&self, error: &dyn std::error::Error);
}

/// Logger that forwards to `tracing`, gated by [`is_enabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLogger;

impl DefaultLogger {
    pub fn new() -> Self {
        Self
    }
}

impl FlowLogger for DefaultLogger {
    fn log(&self, message: &str) {
        log_flow(message);
    }

    fn log_error(&self, error: &dyn std::error::Error) {
        log_flow(&format!("Error: {error}"));
    }
}

/// Log a flow transition through the process-wide logger.
pub fn log_flow(message: &str) {
    if !is_enabled() {
        return;
    }
    tracing::info!(target: "flowkit::flow", "{}", message);
}

/// Log a navigation action through the process-wide logger.
pub fn log_navigation(action: &str, screen: Option<&ScreenHandle>) {
    if !is_enabled() {
        return;
    }
    tracing::info!(
        target: "flowkit::navigation",
        action = %action,
        screen = %describe_screen(screen),
        "Navigation"
    );
}

/// Human-readable description of the screen involved in a navigation action.
pub fn describe_screen(screen: Option<&ScreenHandle>) -> String {
    screen
        .map(|s| s.title().to_string())
        .unwrap_or_else(|| "none".to_string())
}
