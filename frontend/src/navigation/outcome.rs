use std::fmt;
use thiserror::Error;

use crate::Route;

/// Named places the hero buttons can send a visitor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    About,
    Events,
}

impl Destination {
    pub fn route(self) -> Route {
        match self {
            Destination::About => Route::About,
            Destination::Events => Route::Events,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::About => write!(f, "about"),
            Destination::Events => write!(f, "events"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no router available in this view")]
    RouterUnavailable,
}

/// Result of the most recent navigation attempt, as shown to the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NavigationOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl NavigationOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, NavigationOutcome::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The outcome together with the cycle it belongs to.
///
/// Each accepted navigation request opens a new cycle. Settle and reset
/// events name the cycle they were issued for and are dropped once a newer
/// cycle has started, so a late timer can never clobber fresher feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationFeedback {
    outcome: NavigationOutcome,
    cycle: u64,
}

impl NavigationFeedback {
    pub fn outcome(&self) -> &NavigationOutcome {
        &self.outcome
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Opens a new cycle and returns its number, or `None` while a
    /// navigation is still pending.
    pub fn begin(&mut self) -> Option<u64> {
        if self.outcome.is_pending() {
            return None;
        }
        self.cycle += 1;
        self.outcome = NavigationOutcome::Pending;
        Some(self.cycle)
    }

    pub fn settle(&mut self, cycle: u64, result: Result<(), String>) -> bool {
        if cycle != self.cycle || !self.outcome.is_pending() {
            return false;
        }
        self.outcome = match result {
            Ok(()) => NavigationOutcome::Succeeded,
            Err(message) => NavigationOutcome::Failed(message),
        };
        true
    }

    pub fn reset(&mut self, cycle: u64) -> bool {
        if cycle != self.cycle || self.outcome.is_pending() {
            return false;
        }
        self.outcome = NavigationOutcome::Idle;
        true
    }
}
