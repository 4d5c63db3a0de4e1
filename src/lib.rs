//! Navigation and flow coordination for screen-based applications.
//!
//! - [`core`] - the flow/state lifecycle: [`AppStateController`](core::AppStateController),
//!   coordinators and finish events
//! - [`environment`] - service registry, logger and execution contexts
//! - [`navigation`] - screen handles and the navigation-stack collaborator
//! - [`integration`] - screen modules, presenters and paged lists

pub mod config;
pub mod core;
pub mod demo;
pub mod environment;
pub mod error;
pub mod integration;
pub mod logging;
pub mod navigation;
