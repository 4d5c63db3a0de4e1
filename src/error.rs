//! Error types shared across the crate.
//!
//! Flow and state-machine operations never fail; these cover service lookup
//! and list loading.

use thiserror::Error;

/// Why a service could not be resolved from a
/// [`ServiceRegistry`](crate::environment::ServiceRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Nothing was registered under the key.
    #[error("service for {key} not registered")]
    NotRegistered { key: String },

    /// Something was registered under the key, but as a different type.
    #[error("service for {key} registered as {found}, requested as {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A failed page load, kept in list state and shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
