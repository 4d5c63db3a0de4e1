//! Shared test utilities and recording collaborators.

#![allow(dead_code, unused_imports)]

use flowkit::core::{AppState, FinishNotifier, Flow, FlowFactory, FlowFinishEvent, SharedFlow};
use flowkit::environment::Environment;
use flowkit::logging::FlowLogger;
use flowkit::navigation::{NavigationStack, ScreenHandle};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Calls observed by a [`RecordingNavigation`].
#[derive(Debug, Default)]
pub struct NavLog {
    pub pushed: Vec<(ScreenHandle, bool)>,
    pub presented: Vec<(ScreenHandle, bool)>,
    pub pops: Vec<bool>,
}

pub type SharedNavLog = Arc<Mutex<NavLog>>;

/// Navigation stack that records every call.
pub struct RecordingNavigation {
    root: ScreenHandle,
    stack: Vec<ScreenHandle>,
    log: SharedNavLog,
}

impl RecordingNavigation {
    pub fn new() -> (Self, SharedNavLog) {
        let log = SharedNavLog::default();
        let navigation = Self {
            root: ScreenHandle::stack("RecordingNavigation"),
            stack: Vec::new(),
            log: Arc::clone(&log),
        };
        (navigation, log)
    }
}

impl NavigationStack for RecordingNavigation {
    fn root(&self) -> ScreenHandle {
        self.root.clone()
    }

    fn push(&mut self, screen: ScreenHandle, animated: bool) {
        self.log.lock().pushed.push((screen.clone(), animated));
        self.stack.push(screen);
    }

    fn present(&mut self, screen: ScreenHandle, animated: bool) {
        self.log.lock().presented.push((screen.clone(), animated));
        self.root.present(screen);
    }

    fn pop(&mut self, animated: bool) -> Option<ScreenHandle> {
        self.log.lock().pops.push(animated);
        self.stack.pop()
    }

    fn top(&self) -> Option<ScreenHandle> {
        self.stack.last().cloned()
    }
}

/// Flow that counts `start` calls and can finish itself on start.
pub struct TestFlow {
    pub state: AppState,
    root: ScreenHandle,
    notifier: FinishNotifier,
    start_count: AtomicUsize,
    finish_on_start: Option<FlowFinishEvent>,
}

impl TestFlow {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            root: ScreenHandle::new(format!("Test {state}")),
            notifier: FinishNotifier::new(),
            start_count: AtomicUsize::new(0),
            finish_on_start: None,
        }
    }

    pub fn start_count(&self) -> usize {
        self.start_count.load(Ordering::SeqCst)
    }

    pub fn complete(&self, event: FlowFinishEvent) {
        self.finish(event);
    }
}

impl Flow for TestFlow {
    fn root(&self) -> ScreenHandle {
        self.root.clone()
    }

    fn notifier(&self) -> &FinishNotifier {
        &self.notifier
    }

    fn start(&self) {
        self.start_count.fetch_add(1, Ordering::SeqCst);
        if let Some(event) = self.finish_on_start {
            self.finish(event);
        }
    }
}

/// Factory recording every state it builds a flow for.
///
/// Flows are tracked weakly so tests can observe when they are released.
#[derive(Clone, Default)]
pub struct RecordingFactory {
    pub created: Arc<Mutex<Vec<AppState>>>,
    pub flows: Arc<Mutex<Vec<Weak<TestFlow>>>>,
    pub environments: Arc<Mutex<Vec<bool>>>,
    finish_on_start: Arc<Mutex<Vec<(AppState, FlowFinishEvent)>>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flows built for `state` finish with `event` as soon as they start.
    pub fn finish_on_start(self, state: AppState, event: FlowFinishEvent) -> Self {
        self.finish_on_start.lock().push((state, event));
        self
    }

    pub fn created_states(&self) -> Vec<AppState> {
        self.created.lock().clone()
    }

    /// The most recently built flow, if still alive.
    pub fn last_flow(&self) -> Option<Arc<TestFlow>> {
        self.flows.lock().last().and_then(Weak::upgrade)
    }

    pub fn flow(&self, index: usize) -> Option<Arc<TestFlow>> {
        self.flows.lock().get(index).and_then(Weak::upgrade)
    }
}

impl FlowFactory for RecordingFactory {
    fn make_flow(&self, state: AppState, environment: Option<&Environment>) -> SharedFlow {
        self.created.lock().push(state);
        self.environments.lock().push(environment.is_some());

        let mut flow = TestFlow::new(state);
        flow.finish_on_start = self
            .finish_on_start
            .lock()
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, e)| *e);

        let flow = Arc::new(flow);
        self.flows.lock().push(Arc::downgrade(&flow));
        flow
    }
}

/// Logger capturing messages in memory.
#[derive(Default)]
pub struct StubLogger {
    pub messages: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl StubLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl FlowLogger for StubLogger {
    fn log(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }

    fn log_error(&self, error: &dyn std::error::Error) {
        self.errors.lock().push(error.to_string());
    }
}

/// Environment whose logger is the returned stub.
pub fn stub_environment() -> (Environment, Arc<StubLogger>) {
    let logger = Arc::new(StubLogger::default());
    let environment = Environment::builder().logger(logger.clone()).build();
    (environment, logger)
}
