//! Screen containers and the navigation-stack collaborator.
//!
//! The flow core never inspects a screen's contents. It only needs an
//! identity, something that can be pushed/presented/popped, and a place
//! to host a nested presented container.

mod screen;
mod stack;

pub use screen::{ScreenHandle, ScreenId, ScreenKind};
pub use stack::{NavigationController, NavigationStack};

/// Marker for feature-specific navigation interfaces.
///
/// ```
/// use flowkit::navigation::Navigator;
///
/// trait SettingsNavigator: Navigator {
///     fn show_account(&self);
///     fn show_notifications(&self);
/// }
/// ```
pub trait Navigator: Send + Sync {}
