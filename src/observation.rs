//! What the agent sees.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::best_point;

/// The agent's view of an episode.
///
/// Holds a copy of the player hand, so later draws never change an
/// observation already handed out, and only the dealer's first card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Copy of the player's cards.
    pub player: Vec<Card>,
    /// The dealer's first card.
    pub dealer_up: Card,
}

impl Observation {
    /// Returns the player's cards as plain point values.
    #[must_use]
    pub fn player_values(&self) -> Vec<u8> {
        self.player.iter().copied().map(Card::value).collect()
    }

    /// Returns the best point total of the player's cards.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        best_point(&self.player)
    }
}
