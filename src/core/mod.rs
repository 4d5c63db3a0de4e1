//! Flow and state lifecycle core.
//!
//! - [`AppStateController`] maps the application state to the active flow
//! - [`FlowCoordinator`] / [`ModalFlowCoordinator`] are the stock flows
//! - [`FlowFinishEvent`] carries outcomes back up the tree

mod controller;
mod coordinator;
mod event;
mod flow;
mod log;
mod modal;
mod retention;
mod state;

pub use controller::{
    AppStateController, AppStateControllerBuilder, FlowFactory, FlowListener, PlaceholderFactory,
    PlaceholderFlow,
};
pub use coordinator::FlowCoordinator;
pub use event::{FlowFinishEvent, ParseFinishEventError, TransitionTable};
pub use flow::{FinishCallback, FinishNotifier, Flow, SharedFlow};
pub use modal::{ModalFlowCoordinator, ModalRoot};
pub use retention::{CompanionStore, RetentionPolicy};
pub use state::{AppState, ParseAppStateError};
