use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{AppState, RetentionPolicy, TransitionTable};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub app: AppConfig,
}

/// Observability settings. Never affects flow behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit flow and navigation logs (default: false).
    #[serde(default)]
    pub enabled: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Defaults applied by coordinators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Animate navigation transitions (default: true).
    #[serde(default = "default_animated")]
    pub animated: bool,
    /// When companions retained for screens are released (default: flow_lifetime).
    #[serde(default)]
    pub retention: RetentionPolicy,
}

/// Application state machine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// State the controller starts in (default: splash).
    #[serde(default)]
    pub initial_state: AppState,
    /// Make `logout` switch to this state automatically (default: unset).
    #[serde(default)]
    pub logout_state: Option<AppState>,
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_animated() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            filter: default_filter(),
            file: None,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            animated: default_animated(),
            retention: RetentionPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Transition table described by this config.
    pub fn transitions(&self) -> TransitionTable {
        match self.logout_state {
            Some(state) => TransitionTable::new().with_logout(state),
            None => TransitionTable::new(),
        }
    }
}
