//! Loading and error presentation collaborators.

use std::collections::HashMap;
use std::time::Instant;

use parking_lot::Mutex;

use crate::navigation::{ScreenHandle, ScreenId};

/// Overlays a loading indicator on a screen container.
pub trait LoadingPresentable: Send + Sync {
    fn show_loading(&self, screen: &ScreenHandle);

    fn hide_loading(&self, screen: &ScreenHandle);
}

/// Shows an error to the user, on `screen` or wherever the host decides.
pub trait ErrorPresentable: Send + Sync {
    fn show_error(&self, error: &dyn std::error::Error, screen: Option<&ScreenHandle>);
}

/// Tracks loading overlays by screen identity; at most one per screen.
#[derive(Default)]
pub struct DefaultLoadingPresenter {
    overlays: Mutex<HashMap<ScreenId, Instant>>,
}

impl DefaultLoadingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self, screen: &ScreenHandle) -> bool {
        self.overlays.lock().contains_key(&screen.id())
    }

    /// Number of screens currently showing an overlay.
    pub fn overlay_count(&self) -> usize {
        self.overlays.lock().len()
    }
}

impl LoadingPresentable for DefaultLoadingPresenter {
    fn show_loading(&self, screen: &ScreenHandle) {
        let mut overlays = self.overlays.lock();
        if overlays.contains_key(&screen.id()) {
            return;
        }
        overlays.insert(screen.id(), Instant::now());
        tracing::debug!(screen = %screen.title(), "Loading overlay shown");
    }

    fn hide_loading(&self, screen: &ScreenHandle) {
        if let Some(shown_at) = self.overlays.lock().remove(&screen.id()) {
            tracing::debug!(
                screen = %screen.title(),
                visible_ms = shown_at.elapsed().as_millis() as u64,
                "Loading overlay hidden"
            );
        }
    }
}

/// An error shown by [`DefaultErrorPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedError {
    pub screen: Option<ScreenId>,
    pub title: String,
    pub message: String,
}

/// Records presented errors as alerts and logs them.
#[derive(Default)]
pub struct DefaultErrorPresenter {
    presented: Mutex<Vec<PresentedError>>,
}

impl DefaultErrorPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> Vec<PresentedError> {
        self.presented.lock().clone()
    }

    pub fn last(&self) -> Option<PresentedError> {
        self.presented.lock().last().cloned()
    }
}

impl ErrorPresentable for DefaultErrorPresenter {
    fn show_error(&self, error: &dyn std::error::Error, screen: Option<&ScreenHandle>) {
        let alert = PresentedError {
            screen: screen.map(ScreenHandle::id),
            title: "Error".to_string(),
            message: error.to_string(),
        };
        tracing::warn!(
            screen = ?alert.screen,
            message = %alert.message,
            "Presenting error"
        );
        self.presented.lock().push(alert);
    }
}
