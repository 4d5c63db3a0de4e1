//! Flow presented modally on top of another flow.

use parking_lot::Mutex;

use crate::environment::Environment;
use crate::integration::ScreenModule;
use crate::navigation::{NavigationController, NavigationStack, ScreenHandle};

use super::event::FlowFinishEvent;
use super::flow::{FinishNotifier, Flow};
use super::log;
use super::retention::{CompanionStore, RetentionPolicy};

/// Root container of a modal flow.
pub enum ModalRoot {
    /// A navigation stack; screens can be pushed onto it.
    Stack(Box<dyn NavigationStack>),
    /// A single screen; pushes are ignored.
    Screen(ScreenHandle),
}

impl ModalRoot {
    fn handle(&self) -> ScreenHandle {
        match self {
            ModalRoot::Stack(navigation) => navigation.root(),
            ModalRoot::Screen(screen) => screen.clone(),
        }
    }
}

impl Default for ModalRoot {
    fn default() -> Self {
        ModalRoot::Stack(Box::new(NavigationController::new()))
    }
}

/// Child flow created ad hoc by a parent flow.
///
/// The parent subscribes to its finish event directly; modal flows never
/// report to the [`AppStateController`](super::AppStateController).
pub struct ModalFlowCoordinator {
    root: Mutex<ModalRoot>,
    root_handle: ScreenHandle,
    environment: Option<Environment>,
    companions: Mutex<CompanionStore>,
    notifier: FinishNotifier,
}

impl ModalFlowCoordinator {
    /// Modal flow rooted in a fresh navigation stack.
    pub fn new() -> Self {
        Self::with_root(ModalRoot::default())
    }

    pub fn with_root(root: ModalRoot) -> Self {
        let root_handle = root.handle();
        Self {
            root: Mutex::new(root),
            root_handle,
            environment: None,
            companions: Mutex::new(CompanionStore::default()),
            notifier: FinishNotifier::new(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Like [`with_environment`](Self::with_environment) for an optional parent environment.
    pub fn with_parent_environment(mut self, environment: Option<&Environment>) -> Self {
        self.environment = environment.cloned();
        self
    }

    pub fn with_retention(self, policy: RetentionPolicy) -> Self {
        *self.companions.lock() = CompanionStore::new(policy);
        self
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    pub fn retained_count(&self) -> usize {
        self.companions.lock().len()
    }

    /// True when the root is a navigation stack.
    pub fn is_stack_rooted(&self) -> bool {
        matches!(*self.root.lock(), ModalRoot::Stack(_))
    }

    /// Push a module when the root is a navigation stack.
    ///
    /// Returns `false`, retaining nothing, when the root is a bare screen.
    pub fn push(&self, module: ScreenModule, animated: bool) -> bool {
        let mut root = self.root.lock();
        let ModalRoot::Stack(navigation) = &mut *root else {
            log::navigation(
                self.environment(),
                "push ignored, root is not a navigation stack",
                Some(module.screen()),
            );
            return false;
        };

        self.companions.lock().retain(&module);
        log::navigation(self.environment(), "push", Some(module.screen()));
        navigation.push(module.screen().clone(), animated);
        true
    }

    /// Present a module from the root container.
    ///
    /// Presenting while something is already presented stacks the new
    /// screen on top (modal over modal).
    pub fn present(&self, module: ScreenModule, animated: bool) {
        self.companions.lock().retain(&module);
        log::navigation(self.environment(), "present", Some(module.screen()));
        match &mut *self.root.lock() {
            ModalRoot::Stack(navigation) => navigation.present(module.screen().clone(), animated),
            ModalRoot::Screen(screen) => screen.present(module.screen().clone()),
        }
    }

    /// Dismiss what the root container presents.
    pub fn dismiss(&self, animated: bool) -> Option<ScreenHandle> {
        let dismissed = match &mut *self.root.lock() {
            ModalRoot::Stack(navigation) => navigation.dismiss(animated),
            ModalRoot::Screen(screen) => screen.dismiss(),
        };
        log::navigation(self.environment(), "dismiss", dismissed.as_ref());
        if let Some(screen) = &dismissed {
            self.companions.lock().on_dismissed(screen);
        }
        dismissed
    }

    /// Topmost screen on the root stack, or the root screen itself.
    pub fn top(&self) -> Option<ScreenHandle> {
        match &*self.root.lock() {
            ModalRoot::Stack(navigation) => navigation.top(),
            ModalRoot::Screen(screen) => Some(screen.clone()),
        }
    }
}

impl Default for ModalFlowCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow for ModalFlowCoordinator {
    fn root(&self) -> ScreenHandle {
        self.root_handle.clone()
    }

    fn notifier(&self) -> &FinishNotifier {
        &self.notifier
    }

    fn start(&self) {
        log::flow(self.environment(), "ModalFlowCoordinator started");
    }

    fn finish(&self, event: FlowFinishEvent) {
        log::flow(
            self.environment(),
            &format!("ModalFlowCoordinator finished with event: {event}"),
        );
        self.notifier.notify(event);
    }
}
