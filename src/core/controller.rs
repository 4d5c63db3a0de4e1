//! Top-level state machine mapping the application state to a flow.
//!
//! ```text
//! set_state(s) ──→ make_flow(s) ──→ wire finish ──→ current = flow ──→ start()
//!      ↑                                                                │
//!      └──────── switch_to_* finish events (synchronous) ───────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::environment::Environment;
use crate::logging::log_flow;
use crate::navigation::ScreenHandle;

use super::event::{FlowFinishEvent, TransitionTable};
use super::flow::{FinishNotifier, Flow, SharedFlow};
use super::state::AppState;

/// Builds the flow for an application state.
///
/// This is the extension point of the controller: applications dispatch to
/// their concrete flows per state and fall back to [`PlaceholderFactory`].
pub trait FlowFactory: Send + Sync {
    fn make_flow(&self, state: AppState, environment: Option<&Environment>) -> SharedFlow;
}

/// Factory producing [`PlaceholderFlow`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderFactory;

impl FlowFactory for PlaceholderFactory {
    fn make_flow(&self, state: AppState, _environment: Option<&Environment>) -> SharedFlow {
        Arc::new(PlaceholderFlow::new(state))
    }
}

struct FnFactory<F>(F);

impl<F> FlowFactory for FnFactory<F>
where
    F: Fn(AppState, Option<&Environment>) -> SharedFlow + Send + Sync,
{
    fn make_flow(&self, state: AppState, environment: Option<&Environment>) -> SharedFlow {
        (self.0)(state, environment)
    }
}

/// Minimal flow carrying only a label for its state.
pub struct PlaceholderFlow {
    state: AppState,
    root: ScreenHandle,
    notifier: FinishNotifier,
}

impl PlaceholderFlow {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            root: ScreenHandle::new(format!("Placeholder for {state}")),
            notifier: FinishNotifier::new(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }
}

impl Flow for PlaceholderFlow {
    fn root(&self) -> ScreenHandle {
        self.root.clone()
    }

    fn notifier(&self) -> &FinishNotifier {
        &self.notifier
    }

    fn start(&self) {
        log_flow("Starting placeholder flow");
    }
}

/// Receives every finish event of the active flow.
pub type FlowListener = Arc<dyn Fn(&AppStateController, FlowFinishEvent) + Send + Sync>;

/// Holds the current [`AppState`] and the flow built for it.
///
/// Cloning yields another handle to the same controller. Flows hold only a
/// weak reference back, so dropping every handle releases the controller
/// and its current flow.
///
/// State and flow change together under one lock. When two threads switch
/// state concurrently, the flow built for the later request wins and the
/// other is discarded without being started.
#[derive(Clone)]
pub struct AppStateController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    current: Mutex<Current>,
    listener: Mutex<Option<FlowListener>>,
    factory: Box<dyn FlowFactory>,
    environment: Option<Environment>,
    transitions: TransitionTable,
}

struct Current {
    state: AppState,
    flow: Option<SharedFlow>,
    // Bumped by every accepted `set_state`; a flow built for an older
    // generation is never installed.
    generation: u64,
    launched: bool,
}

impl AppStateController {
    /// Controller with placeholder flows starting in `initial`.
    pub fn new(initial: AppState) -> Self {
        Self::builder(initial).build()
    }

    pub fn builder(initial: AppState) -> AppStateControllerBuilder {
        AppStateControllerBuilder {
            initial,
            factory: None,
            environment: None,
            transitions: TransitionTable::default(),
        }
    }

    pub fn current_state(&self) -> AppState {
        self.inner.current.lock().state
    }

    pub fn current_flow(&self) -> Option<SharedFlow> {
        self.inner.current.lock().flow.clone()
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.inner.environment.as_ref()
    }

    pub fn transitions(&self) -> TransitionTable {
        self.inner.transitions
    }

    /// Root container of the current flow, or an empty container when
    /// there is no flow.
    pub fn current_root(&self) -> ScreenHandle {
        self.current_flow()
            .map(|flow| flow.root())
            .unwrap_or_else(|| ScreenHandle::new("Empty"))
    }

    /// Set the listener receiving every finish event of the active flow.
    ///
    /// The listener runs before any automatic transition.
    pub fn set_on_flow_finish<F>(&self, listener: F)
    where
        F: Fn(&AppStateController, FlowFinishEvent) + Send + Sync + 'static,
    {
        *self.inner.listener.lock() = Some(Arc::new(listener));
    }

    pub fn clear_on_flow_finish(&self) {
        *self.inner.listener.lock() = None;
    }

    /// Start the flow built for the initial state.
    ///
    /// Construction builds that flow but leaves starting it to the host.
    /// Only the first call does anything, and nothing happens once
    /// [`set_state`](Self::set_state) has already started a flow.
    pub fn launch(&self) {
        let (state, flow) = {
            let mut current = self.inner.current.lock();
            if current.launched {
                tracing::trace!(state = %current.state, "Already launched");
                return;
            }
            current.launched = true;
            (current.state, current.flow.clone())
        };
        let Some(flow) = flow else {
            return;
        };
        tracing::debug!(state = %state, "Launching initial flow");
        flow.start();
    }

    /// Switch to `state`, replacing the current flow.
    ///
    /// No-op when `state` is already current. Otherwise the new flow is
    /// built, wired, made current and started, in that order. The previous
    /// flow is released once replaced.
    pub fn set_state(&self, state: AppState) {
        let (generation, previous_state) = {
            let mut current = self.inner.current.lock();
            if current.state == state {
                tracing::trace!(state = %state, "State unchanged, keeping current flow");
                return;
            }
            current.generation += 1;
            let previous_state = std::mem::replace(&mut current.state, state);
            (current.generation, previous_state)
        };

        // Built without the lock: factories may be slow or reenter.
        let flow = self
            .inner
            .factory
            .make_flow(state, self.inner.environment.as_ref());
        self.wire(&flow);

        let previous = {
            let mut current = self.inner.current.lock();
            if current.generation != generation {
                tracing::debug!(state = %state, "Discarding flow superseded by a later state change");
                return;
            }
            current.launched = true;
            current.flow.replace(Arc::clone(&flow))
        };
        drop(previous);

        tracing::debug!(from = %previous_state, to = %state, "App state changed");
        flow.start();
        log_flow(&format!("Switched to state: {state}"));
    }

    fn wire(&self, flow: &SharedFlow) {
        let controller: Weak<ControllerInner> = Arc::downgrade(&self.inner);
        flow.set_on_finish(Arc::new(move |event| {
            if let Some(inner) = controller.upgrade() {
                AppStateController { inner }.handle_flow_finish(event);
            }
        }));
    }

    fn handle_flow_finish(&self, event: FlowFinishEvent) {
        let listener = self.inner.listener.lock().clone();
        if let Some(listener) = listener {
            listener(self, event);
        }

        match self.inner.transitions.target(event) {
            Some(target) => self.set_state(target),
            None => tracing::trace!(event = %event, "Finish event has no automatic transition"),
        }
    }
}

impl fmt::Debug for AppStateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStateController")
            .field("state", &self.current_state())
            .field("transitions", &self.inner.transitions)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AppStateController`].
pub struct AppStateControllerBuilder {
    initial: AppState,
    factory: Option<Box<dyn FlowFactory>>,
    environment: Option<Environment>,
    transitions: TransitionTable,
}

impl AppStateControllerBuilder {
    pub fn factory(mut self, factory: impl FlowFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Use a closure as the flow factory.
    pub fn factory_fn<F>(mut self, factory: F) -> Self
    where
        F: Fn(AppState, Option<&Environment>) -> SharedFlow + Send + Sync + 'static,
    {
        self.factory = Some(Box::new(FnFactory(factory)));
        self
    }

    /// Environment handed to the factory for every flow.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn transitions(mut self, transitions: TransitionTable) -> Self {
        self.transitions = transitions;
        self
    }

    /// Build the controller and the (not yet started) flow for the initial state.
    pub fn build(self) -> AppStateController {
        let factory = self
            .factory
            .unwrap_or_else(|| Box::new(PlaceholderFactory));
        let controller = AppStateController {
            inner: Arc::new(ControllerInner {
                current: Mutex::new(Current {
                    state: self.initial,
                    flow: None,
                    generation: 0,
                    launched: false,
                }),
                listener: Mutex::new(None),
                factory,
                environment: self.environment,
                transitions: self.transitions,
            }),
        };

        let flow = controller
            .inner
            .factory
            .make_flow(self.initial, controller.inner.environment.as_ref());
        controller.wire(&flow);
        controller.inner.current.lock().flow = Some(flow);
        controller
    }
}
