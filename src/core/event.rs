use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::AppState;

/// Outcome a flow reports when it terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowFinishEvent {
    Completed,
    Cancelled,
    Logout,
    SwitchToAuthorized,
    SwitchToOnboarding,
    SwitchToGuest,
    SwitchToBanned,
}

impl FlowFinishEvent {
    pub const ALL: [FlowFinishEvent; 7] = [
        FlowFinishEvent::Completed,
        FlowFinishEvent::Cancelled,
        FlowFinishEvent::Logout,
        FlowFinishEvent::SwitchToAuthorized,
        FlowFinishEvent::SwitchToOnboarding,
        FlowFinishEvent::SwitchToGuest,
        FlowFinishEvent::SwitchToBanned,
    ];

    /// State this event switches to, for the `switch_to_*` events.
    pub fn target_state(&self) -> Option<AppState> {
        match self {
            FlowFinishEvent::SwitchToAuthorized => Some(AppState::Authorized),
            FlowFinishEvent::SwitchToOnboarding => Some(AppState::Onboarding),
            FlowFinishEvent::SwitchToGuest => Some(AppState::Guest),
            FlowFinishEvent::SwitchToBanned => Some(AppState::Banned),
            FlowFinishEvent::Completed | FlowFinishEvent::Cancelled | FlowFinishEvent::Logout => {
                None
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowFinishEvent::Completed => "completed",
            FlowFinishEvent::Cancelled => "cancelled",
            FlowFinishEvent::Logout => "logout",
            FlowFinishEvent::SwitchToAuthorized => "switch_to_authorized",
            FlowFinishEvent::SwitchToOnboarding => "switch_to_onboarding",
            FlowFinishEvent::SwitchToGuest => "switch_to_guest",
            FlowFinishEvent::SwitchToBanned => "switch_to_banned",
        }
    }
}

impl fmt::Display for FlowFinishEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown finish event '{0}'")]
pub struct ParseFinishEventError(pub String);

impl FromStr for FlowFinishEvent {
    type Err = ParseFinishEventError;

    /// Accepts `switch_to_guest` as well as `switch-to-guest`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        FlowFinishEvent::ALL
            .into_iter()
            .find(|event| event.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseFinishEventError(s.to_string()))
    }
}

/// Which finish events move the state machine automatically.
///
/// The four `switch_to_*` events always transition. `logout` only does
/// when a target is configured; otherwise it is left to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionTable {
    logout: Option<AppState>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `logout` an automatic transition to `state`.
    pub fn with_logout(mut self, state: AppState) -> Self {
        self.logout = Some(state);
        self
    }

    pub fn logout(&self) -> Option<AppState> {
        self.logout
    }

    /// State the controller should switch to after `event`, if any.
    pub fn target(&self, event: FlowFinishEvent) -> Option<AppState> {
        match event {
            FlowFinishEvent::Logout => self.logout,
            other => other.target_state(),
        }
    }
}
