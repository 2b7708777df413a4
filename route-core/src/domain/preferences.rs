//! Trip preferences.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TransportMode;

/// How much the user wants to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Low,
    Medium,
    High,
}

/// The dimension routes are primarily sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Time,
    Cost,
    Comfort,
    Environment,
}

/// User preferences for a trip.
///
/// `preferred_modes` is an ordered set so iteration (and everything
/// derived from it) is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPreferences {
    pub budget: Budget,
    pub priority: Priority,
    pub max_breaks: u32,
    pub preferred_modes: BTreeSet<TransportMode>,
    pub avoid_tolls: bool,
    pub accessibility_needs: bool,
}

impl Default for TripPreferences {
    /// Mirrors the UI's initial state: medium budget, time priority,
    /// two breaks, driving/flight/train enabled.
    fn default() -> Self {
        Self {
            budget: Budget::Medium,
            priority: Priority::Time,
            max_breaks: 2,
            preferred_modes: BTreeSet::from([
                TransportMode::DriveNoTolls,
                TransportMode::Flight,
                TransportMode::Train,
            ]),
            avoid_tolls: false,
            accessibility_needs: false,
        }
    }
}

impl TripPreferences {
    /// Replace the selected mode set.
    pub fn with_modes(mut self, modes: impl IntoIterator<Item = TransportMode>) -> Self {
        self.preferred_modes = modes.into_iter().collect();
        self
    }

    /// Replace the ranking priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
