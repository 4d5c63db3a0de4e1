//! Lifetime of companion objects retained by coordinators.

use serde::{Deserialize, Serialize};

use crate::integration::{Companion, ScreenModule};
use crate::navigation::{ScreenHandle, ScreenId};

/// When a coordinator lets go of the companion retained for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Companions live as long as the coordinator and are released together
    /// when it is dropped. Popping a screen releases nothing.
    #[default]
    FlowLifetime,
    /// Popping a screen releases the companion retained with it.
    ReleaseOnPop,
}

/// Companions kept alive on behalf of pushed or presented screens.
#[derive(Default)]
pub struct CompanionStore {
    policy: RetentionPolicy,
    retained: Vec<(ScreenId, Companion)>,
}

impl CompanionStore {
    pub fn new(policy: RetentionPolicy) -> Self {
        Self {
            policy,
            retained: Vec::new(),
        }
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Keep the module's companion, if it has one.
    pub fn retain(&mut self, module: &ScreenModule) {
        if let Some(companion) = module.companion() {
            self.retained.push((module.screen().id(), companion.clone()));
        }
    }

    /// Apply the policy to a screen that left the stack.
    ///
    /// Returns how many companions were released.
    pub fn on_removed(&mut self, screen: &ScreenHandle) -> usize {
        if self.policy != RetentionPolicy::ReleaseOnPop {
            return 0;
        }
        let before = self.retained.len();
        self.retained.retain(|(id, _)| *id != screen.id());
        before - self.retained.len()
    }

    /// Apply the policy to a dismissed screen and everything presented on
    /// top of it, since dismissal takes the whole chain down.
    pub fn on_dismissed(&mut self, screen: &ScreenHandle) -> usize {
        let mut released = self.on_removed(screen);
        let mut next = screen.presented();
        while let Some(current) = next {
            released += self.on_removed(&current);
            next = current.presented();
        }
        released
    }

    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn module_with_companion(title: &str) -> (ScreenModule, std::sync::Weak<String>) {
        let companion = Arc::new(format!("{title} view model"));
        let weak = Arc::downgrade(&companion);
        (
            ScreenModule::with_companion(ScreenHandle::new(title), companion),
            weak,
        )
    }

    #[test]
    fn flow_lifetime_ignores_removal() {
        let mut store = CompanionStore::new(RetentionPolicy::FlowLifetime);
        let (module, weak) = module_with_companion("List");
        store.retain(&module);
        let screen = module.screen().clone();
        drop(module);

        assert_eq!(store.on_removed(&screen), 0);
        assert!(weak.upgrade().is_some());
    }

    #[test]
    fn release_on_pop_drops_matching_companion() {
        let mut store = CompanionStore::new(RetentionPolicy::ReleaseOnPop);
        let (first, first_weak) = module_with_companion("First");
        let (second, second_weak) = module_with_companion("Second");
        store.retain(&first);
        store.retain(&second);
        let second_screen = second.screen().clone();
        drop((first, second));

        assert_eq!(store.on_removed(&second_screen), 1);
        assert!(second_weak.upgrade().is_none());
        assert!(first_weak.upgrade().is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn modules_without_companion_are_not_stored() {
        let mut store = CompanionStore::default();
        store.retain(&ScreenModule::new(ScreenHandle::new("Plain")));
        assert!(store.is_empty());
    }

    #[test]
    fn dismissal_releases_the_presented_chain() {
        let mut store = CompanionStore::new(RetentionPolicy::ReleaseOnPop);
        let (sheet, weak_sheet) = module_with_companion("Sheet");
        let (alert, weak_alert) = module_with_companion("Alert");
        store.retain(&sheet);
        store.retain(&alert);
        sheet.screen().present(alert.screen().clone());
        let screen = sheet.screen().clone();
        drop((sheet, alert));

        assert_eq!(store.on_dismissed(&screen), 2);
        assert!(weak_sheet.upgrade().is_none());
        assert!(weak_alert.upgrade().is_none());
        assert!(store.is_empty());
    }
}
