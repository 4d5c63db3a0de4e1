//! Execution contexts carried by an [`Environment`](super::Environment).

use std::fmt;

/// Unit of work handed to an executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that runs jobs.
pub trait Executor: Send + Sync {
    fn execute(&self, job: Job);
}

/// Runs every job immediately on the calling thread.
///
/// This is the main context for the flow core, which is synchronous.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn execute(&self, job: Job) {
        job();
    }
}

/// Runs each job on its own named OS thread.
#[derive(Debug, Clone)]
pub struct ThreadExecutor {
    name: String,
}

impl ThreadExecutor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ThreadExecutor {
    fn default() -> Self {
        Self::new("flowkit-background")
    }
}

impl Executor for ThreadExecutor {
    fn execute(&self, job: Job) {
        let spawned = std::thread::Builder::new()
            .name(self.name.clone())
            .spawn(job);
        if let Err(err) = spawned {
            tracing::error!(executor = %self.name, error = %err, "Failed to spawn background job");
        }
    }
}

/// Runs jobs on the blocking pool of a tokio runtime.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

impl TokioExecutor {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime the caller is running inside, if any.
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl fmt::Debug for TokioExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioExecutor").finish_non_exhaustive()
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, job: Job) {
        // Fire and forget: the join handle is not needed.
        drop(self.handle.spawn_blocking(job));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    #[test]
    fn inline_runs_before_returning() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        InlineExecutor.execute(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn thread_executor_uses_named_thread() {
        let (tx, rx) = mpsc::channel();
        ThreadExecutor::new("flowkit-test").execute(Box::new(move || {
            let name = std::thread::current().name().map(str::to_string);
            let _ = tx.send(name);
        }));
        let name = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(name.as_deref(), Some("flowkit-test"));
    }

    #[tokio::test]
    async fn tokio_executor_runs_on_runtime() {
        let executor = TokioExecutor::current().expect("inside runtime");
        let (tx, rx) = tokio::sync::oneshot::channel();
        executor.execute(Box::new(move || {
            let _ = tx.send(7);
        }));
        assert_eq!(rx.await.unwrap(), 7);
    }
}
