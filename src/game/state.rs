//! Episode state types.

use core::fmt;

use crate::card::{Card, CardSource};
use crate::hand::Hand;
use crate::observation::Observation;

/// Phase of an episode. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to draw or stand.
    PlayerTurn,
    /// Dealer is playing out their hand.
    DealerTurn,
    /// Episode is over (settled or bust).
    Settled,
}

/// One episode: the phase plus both hands.
#[derive(Clone)]
pub(crate) struct Episode {
    pub(crate) phase: Phase,
    pub(crate) player: Hand,
    pub(crate) dealer: Hand,
    /// The dealer's first card, the only one the agent may see.
    pub(crate) dealer_up: Card,
}

impl fmt::Debug for Episode {
    // The dealer's hole card stays out of debug output until settlement.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Episode");
        debug
            .field("phase", &self.phase)
            .field("player", &self.player)
            .field("dealer_up", &self.dealer_up);

        if self.phase == Phase::Settled {
            debug.field("dealer", &self.dealer).finish()
        } else {
            debug.finish_non_exhaustive()
        }
    }
}

impl Episode {
    /// Deals two cards to the player, then two to the dealer.
    pub(crate) fn deal<S: CardSource>(source: &mut S) -> Self {
        let mut player = Hand::new();
        player.add_card(source.draw());
        player.add_card(source.draw());

        let dealer_up = source.draw();
        let mut dealer = Hand::new();
        dealer.add_card(dealer_up);
        dealer.add_card(source.draw());

        Self {
            phase: Phase::PlayerTurn,
            player,
            dealer,
            dealer_up,
        }
    }

    pub(crate) fn observation(&self) -> Observation {
        Observation {
            player: self.player.cards().to_vec(),
            dealer_up: self.dealer_up,
        }
    }
}
