//! Shared services, logger and execution contexts passed through a flow tree.

mod executor;
mod registry;

use std::fmt;
use std::sync::Arc;

use crate::logging::{DefaultLogger, FlowLogger};

pub use executor::{Executor, InlineExecutor, Job, ThreadExecutor, TokioExecutor};
pub use registry::{ServiceKey, ServiceRegistry};

/// Immutable bundle shared by reference across a flow tree.
///
/// Only the contained [`ServiceRegistry`] mutates after construction, and
/// only through its own lock.
#[derive(Clone)]
pub struct Environment {
    services: Arc<ServiceRegistry>,
    logger: Arc<dyn FlowLogger>,
    main: Arc<dyn Executor>,
    background: Arc<dyn Executor>,
}

impl Environment {
    /// Environment with an empty registry and default collaborators.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// Shared handle to the registry, for handing to background work.
    pub fn services_arc(&self) -> Arc<ServiceRegistry> {
        Arc::clone(&self.services)
    }

    pub fn logger(&self) -> &dyn FlowLogger {
        self.logger.as_ref()
    }

    pub fn main(&self) -> &dyn Executor {
        self.main.as_ref()
    }

    pub fn background(&self) -> &dyn Executor {
        self.background.as_ref()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("services", &self.services.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Environment`]. Unset parts fall back to defaults.
#[derive(Default)]
pub struct EnvironmentBuilder {
    services: Option<Arc<ServiceRegistry>>,
    logger: Option<Arc<dyn FlowLogger>>,
    main: Option<Arc<dyn Executor>>,
    background: Option<Arc<dyn Executor>>,
}

impl EnvironmentBuilder {
    pub fn services(mut self, services: Arc<ServiceRegistry>) -> Self {
        self.services = Some(services);
        self
    }

    pub fn logger(mut self, logger: Arc<dyn FlowLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn main(mut self, executor: Arc<dyn Executor>) -> Self {
        self.main = Some(executor);
        self
    }

    pub fn background(mut self, executor: Arc<dyn Executor>) -> Self {
        self.background = Some(executor);
        self
    }

    pub fn build(self) -> Environment {
        Environment {
            services: self.services.unwrap_or_default(),
            logger: self.logger.unwrap_or_else(|| Arc::new(DefaultLogger::new())),
            main: self.main.unwrap_or_else(|| Arc::new(InlineExecutor)),
            background: self
                .background
                .unwrap_or_else(|| Arc::new(ThreadExecutor::default())),
        }
    }
}
