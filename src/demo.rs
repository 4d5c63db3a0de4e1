//! Example application flows used by the `flowkit-demo` binary.
//!
//! Each flow pushes one screen whose view model names the event its
//! button finishes the flow with.

use std::sync::Arc;

use crate::core::{
    AppState, FinishNotifier, Flow, FlowCoordinator, FlowFactory, FlowFinishEvent,
    PlaceholderFactory, RetentionPolicy, SharedFlow,
};
use crate::config::NavigationConfig;
use crate::environment::Environment;
use crate::integration::ScreenModule;
use crate::navigation::ScreenHandle;

/// View model of a screen with a single button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionViewModel {
    pub title: &'static str,
    pub button: &'static str,
    pub on_tap: FlowFinishEvent,
}

/// Flow showing one [`ActionViewModel`] screen.
pub struct ActionFlow {
    coordinator: FlowCoordinator,
    model: Arc<ActionViewModel>,
    animated: bool,
}

impl ActionFlow {
    pub fn new(
        model: ActionViewModel,
        environment: Option<&Environment>,
        retention: RetentionPolicy,
    ) -> Self {
        let mut coordinator = FlowCoordinator::new().with_retention(retention);
        if let Some(env) = environment {
            coordinator = coordinator.with_environment(env.clone());
        }
        Self {
            coordinator,
            model: Arc::new(model),
            animated: true,
        }
    }

    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn model(&self) -> &ActionViewModel {
        &self.model
    }

    pub fn coordinator(&self) -> &FlowCoordinator {
        &self.coordinator
    }

    /// Simulate a tap on the screen's button.
    pub fn tap(&self) {
        self.finish(self.model.on_tap);
    }
}

impl Flow for ActionFlow {
    fn root(&self) -> ScreenHandle {
        self.coordinator.root()
    }

    fn notifier(&self) -> &FinishNotifier {
        self.coordinator.notifier()
    }

    fn start(&self) {
        let screen = ScreenHandle::new(self.model.title);
        // The flow keeps the view model alive, not the screen.
        let module = ScreenModule::with_companion(screen, Arc::clone(&self.model));
        self.coordinator.push(module, self.animated);
    }

    fn finish(&self, event: FlowFinishEvent) {
        self.coordinator.finish(event);
    }
}

/// Factory wiring the example application together.
///
/// Splash and banned fall back to placeholder flows.
#[derive(Debug, Clone, Copy)]
pub struct DemoFactory {
    retention: RetentionPolicy,
    animated: bool,
}

impl DemoFactory {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            retention,
            animated: true,
        }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            retention: config.retention,
            animated: config.animated,
        }
    }

    fn model_for(state: AppState) -> Option<ActionViewModel> {
        match state {
            AppState::Onboarding => Some(ActionViewModel {
                title: "Welcome",
                button: "Continue",
                on_tap: FlowFinishEvent::SwitchToAuthorized,
            }),
            AppState::Authorized => Some(ActionViewModel {
                title: "Dashboard",
                button: "Log out",
                on_tap: FlowFinishEvent::Logout,
            }),
            AppState::Guest => Some(ActionViewModel {
                title: "Guest",
                button: "Register",
                on_tap: FlowFinishEvent::SwitchToOnboarding,
            }),
            AppState::Splash | AppState::Banned => None,
        }
    }
}

impl Default for DemoFactory {
    fn default() -> Self {
        Self::new(RetentionPolicy::default())
    }
}

impl FlowFactory for DemoFactory {
    fn make_flow(&self, state: AppState, environment: Option<&Environment>) -> SharedFlow {
        match Self::model_for(state) {
            Some(model) => Arc::new(
                ActionFlow::new(model, environment, self.retention).with_animation(self.animated),
            ),
            None => PlaceholderFactory.make_flow(state, environment),
        }
    }
}
