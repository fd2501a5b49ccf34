//! Step result types.

extern crate alloc;

use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::observation::Observation;

/// Auxiliary diagnostics returned with every step. Always empty.
pub type Info = HashMap<String, String>;

/// How a finished episode ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns the reward paid for this outcome.
    #[must_use]
    pub const fn reward(self) -> i8 {
        match self {
            Self::Win => 1,
            Self::Lose => -1,
            Self::Push => 0,
        }
    }
}

/// Result of a single `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Observation after the action was applied.
    pub observation: Observation,
    /// Reward in `{-1, 0, 1}`.
    pub reward: i8,
    /// Whether the episode is over.
    pub terminal: bool,
    /// Reserved for diagnostics.
    pub info: Info,
    /// The outcome, once the episode is over.
    pub outcome: Option<Outcome>,
}

impl StepResult {
    pub(crate) fn ongoing(observation: Observation) -> Self {
        Self {
            observation,
            reward: 0,
            terminal: false,
            info: Info::default(),
            outcome: None,
        }
    }

    pub(crate) fn finished(observation: Observation, outcome: Outcome) -> Self {
        Self {
            observation,
            reward: outcome.reward(),
            terminal: true,
            info: Info::default(),
            outcome: Some(outcome),
        }
    }

    /// Splits the result into the `(observation, reward, terminal, info)` tuple.
    #[must_use]
    pub fn into_parts(self) -> (Observation, i8, bool, Info) {
        (self.observation, self.reward, self.terminal, self.info)
    }
}
