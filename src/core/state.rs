use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide mode selecting which flow is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    #[default]
    Splash,
    Onboarding,
    Authorized,
    Guest,
    Banned,
}

impl AppState {
    pub const ALL: [AppState; 5] = [
        AppState::Splash,
        AppState::Onboarding,
        AppState::Authorized,
        AppState::Guest,
        AppState::Banned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Splash => "splash",
            AppState::Onboarding => "onboarding",
            AppState::Authorized => "authorized",
            AppState::Guest => "guest",
            AppState::Banned => "banned",
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown app state '{0}'")]
pub struct ParseAppStateError(pub String);

impl FromStr for AppState {
    type Err = ParseAppStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAppStateError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Guest".parse::<AppState>(), Ok(AppState::Guest));
        assert_eq!("banned".parse::<AppState>(), Ok(AppState::Banned));
        assert!("admin".parse::<AppState>().is_err());
    }

    #[test]
    fn default_is_splash() {
        assert_eq!(AppState::default(), AppState::Splash);
    }
}
