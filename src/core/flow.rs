//! The `Flow` capability and its finish notification hook.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::navigation::ScreenHandle;

use super::event::FlowFinishEvent;

/// Callback invoked with the event a flow finishes with.
pub type FinishCallback = Arc<dyn Fn(FlowFinishEvent) + Send + Sync>;

/// Flows are shared by reference; the last owner to drop one releases it
/// together with everything it retains.
pub type SharedFlow = Arc<dyn Flow>;

/// A unit of navigation behavior with one entry point and one outcome.
///
/// Methods take `&self`: implementations keep mutable parts behind locks
/// and must not hold a lock while calling [`finish`](Flow::finish), since a
/// finish can synchronously replace the finishing flow.
pub trait Flow: Send + Sync {
    /// Root screen container. Created with the flow and never replaced.
    fn root(&self) -> ScreenHandle;

    fn notifier(&self) -> &FinishNotifier;

    /// Perform the initial navigation.
    fn start(&self);

    /// Replace the finish callback. Last writer wins.
    fn set_on_finish(&self, callback: FinishCallback) {
        self.notifier().set_callback(callback);
    }

    /// Report the outcome of this flow to its subscribers.
    fn finish(&self, event: FlowFinishEvent) {
        self.notifier().notify(event);
    }
}

/// Finish-event subscribers of a flow.
///
/// [`set`](Self::set) keeps a single slot (replacing every subscriber);
/// [`subscribe`](Self::subscribe) appends, and subscribers are invoked in
/// subscription order. Notifying does not clear anything.
#[derive(Default)]
pub struct FinishNotifier {
    subscribers: Mutex<Vec<FinishCallback>>,
}

impl FinishNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<F>(&self, callback: F)
    where
        F: Fn(FlowFinishEvent) + Send + Sync + 'static,
    {
        self.set_callback(Arc::new(callback));
    }

    pub fn set_callback(&self, callback: FinishCallback) {
        let mut subscribers = self.subscribers.lock();
        subscribers.clear();
        subscribers.push(callback);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(FlowFinishEvent) + Send + Sync + 'static,
    {
        self.subscribers.lock().push(Arc::new(callback));
    }

    pub fn clear(&self) {
        self.subscribers.lock().clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    pub fn notify(&self, event: FlowFinishEvent) {
        // Snapshot so callbacks can touch this notifier without deadlocking.
        let subscribers = self.subscribers.lock().clone();
        for subscriber in subscribers {
            subscriber(event);
        }
    }
}
