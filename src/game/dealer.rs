use core::cmp::Ordering;

use crate::action::Action;
use crate::card::CardSource;
use crate::hand::BUST_LIMIT;
use crate::policy::Policy;
use crate::result::{Outcome, StepResult};

use super::state::{Episode, Phase};

impl Episode {
    /// Dealer plays their hand and the episode is settled.
    ///
    /// The dealer consults `dealer` with their current total and draws until it
    /// says stand. A dealer bust pays the player immediately; otherwise the
    /// player's total is compared against the dealer's.
    pub(super) fn play_dealer<S: CardSource, P: Policy>(
        &mut self,
        source: &mut S,
        dealer: &P,
    ) -> StepResult {
        self.phase = Phase::DealerTurn;

        let player_value = self.player.value();
        let mut dealer_value = self.dealer.value();

        while dealer.act(dealer_value) == Action::Draw {
            self.dealer.add_card(source.draw());
            dealer_value = self.dealer.value();

            if dealer_value > BUST_LIMIT {
                self.phase = Phase::Settled;
                return StepResult::finished(self.observation(), Outcome::Win);
            }
        }

        self.phase = Phase::Settled;

        let outcome = match player_value.cmp(&dealer_value) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Push,
            Ordering::Less => Outcome::Lose,
        };

        StepResult::finished(self.observation(), outcome)
    }
}
