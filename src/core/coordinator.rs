//! Stack-based flow built around a navigation-stack collaborator.

use parking_lot::Mutex;

use crate::environment::Environment;
use crate::integration::ScreenModule;
use crate::navigation::{NavigationController, NavigationStack, ScreenHandle};

use super::event::FlowFinishEvent;
use super::flow::{FinishNotifier, Flow};
use super::log;
use super::retention::{CompanionStore, RetentionPolicy};

/// Base [`Flow`] driving a navigation stack.
///
/// Host flows compose a coordinator and implement [`Flow`] by delegating
/// `root` and `notifier` to it, doing their first navigation in `start`:
///
/// ```
/// use flowkit::core::{Flow, FinishNotifier, FlowCoordinator};
/// use flowkit::integration::ScreenModule;
/// use flowkit::navigation::ScreenHandle;
///
/// struct HomeFlow {
///     coordinator: FlowCoordinator,
/// }
///
/// impl Flow for HomeFlow {
///     fn root(&self) -> ScreenHandle {
///         self.coordinator.root()
///     }
///
///     fn notifier(&self) -> &FinishNotifier {
///         self.coordinator.notifier()
///     }
///
///     fn start(&self) {
///         self.coordinator
///             .push(ScreenModule::new(ScreenHandle::new("Home")), false);
///     }
/// }
///
/// let flow = HomeFlow { coordinator: FlowCoordinator::new() };
/// flow.start();
/// assert_eq!(flow.coordinator.top().map(|s| s.title().to_string()), Some("Home".into()));
/// ```
pub struct FlowCoordinator {
    navigation: Mutex<Box<dyn NavigationStack>>,
    root: ScreenHandle,
    environment: Option<Environment>,
    companions: Mutex<CompanionStore>,
    notifier: FinishNotifier,
}

impl FlowCoordinator {
    /// Coordinator over a fresh [`NavigationController`].
    pub fn new() -> Self {
        Self::with_navigation(Box::new(NavigationController::new()))
    }

    pub fn with_navigation(navigation: Box<dyn NavigationStack>) -> Self {
        let root = navigation.root();
        Self {
            navigation: Mutex::new(navigation),
            root,
            environment: None,
            companions: Mutex::new(CompanionStore::default()),
            notifier: FinishNotifier::new(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_retention(self, policy: RetentionPolicy) -> Self {
        *self.companions.lock() = CompanionStore::new(policy);
        self
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    pub fn retention_policy(&self) -> RetentionPolicy {
        self.companions.lock().policy()
    }

    /// Number of companions currently kept alive by this coordinator.
    pub fn retained_count(&self) -> usize {
        self.companions.lock().len()
    }

    /// Retain the module's companion and push its screen.
    pub fn push(&self, module: ScreenModule, animated: bool) {
        self.companions.lock().retain(&module);
        log::navigation(self.environment(), "push", Some(module.screen()));
        self.navigation
            .lock()
            .push(module.screen().clone(), animated);
    }

    /// Retain the module's companion and present its screen modally.
    pub fn present(&self, module: ScreenModule, animated: bool) {
        self.companions.lock().retain(&module);
        log::navigation(self.environment(), "present", Some(module.screen()));
        self.navigation
            .lock()
            .present(module.screen().clone(), animated);
    }

    /// Pop the top screen.
    ///
    /// Whether its companion is released depends on the
    /// [`RetentionPolicy`].
    pub fn pop(&self, animated: bool) -> Option<ScreenHandle> {
        let popped = {
            let mut navigation = self.navigation.lock();
            let top = navigation.top();
            log::navigation(self.environment(), "pop", top.as_ref());
            navigation.pop(animated)
        };
        if let Some(screen) = &popped {
            self.companions.lock().on_removed(screen);
        }
        popped
    }

    /// Dismiss the modally presented screen.
    pub fn dismiss(&self, animated: bool) -> Option<ScreenHandle> {
        let dismissed = self.navigation.lock().dismiss(animated);
        log::navigation(self.environment(), "dismiss", dismissed.as_ref());
        if let Some(screen) = &dismissed {
            self.companions.lock().on_dismissed(screen);
        }
        dismissed
    }

    pub fn top(&self) -> Option<ScreenHandle> {
        self.navigation.lock().top()
    }

    /// Run `f` against the navigation stack.
    ///
    /// Do not call back into this coordinator from `f`.
    pub fn with_navigation_stack<R>(&self, f: impl FnOnce(&mut dyn NavigationStack) -> R) -> R {
        let mut navigation = self.navigation.lock();
        f(navigation.as_mut())
    }
}

impl Default for FlowCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow for FlowCoordinator {
    fn root(&self) -> ScreenHandle {
        self.root.clone()
    }

    fn notifier(&self) -> &FinishNotifier {
        &self.notifier
    }

    fn start(&self) {
        log::flow(self.environment(), "FlowCoordinator started");
    }

    fn finish(&self, event: FlowFinishEvent) {
        log::flow(
            self.environment(),
            &format!("FlowCoordinator finished with event: {event}"),
        );
        self.notifier.notify(event);
    }
}
