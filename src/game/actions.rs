use crate::action::Action;
use crate::card::CardSource;
use crate::error::StepError;
use crate::policy::Policy;
use crate::result::{Outcome, StepResult};

use super::state::{Episode, Phase};
use super::BlackjackEnv;

impl Episode {
    /// Player action: Draw (take one card).
    ///
    /// A bust ends the episode with a loss; the dealer never plays.
    fn hit<S: CardSource>(&mut self, source: &mut S) -> StepResult {
        self.player.add_card(source.draw());

        if self.player.is_bust() {
            self.phase = Phase::Settled;
            return StepResult::finished(self.observation(), Outcome::Lose);
        }

        StepResult::ongoing(self.observation())
    }
}

impl<S: CardSource, P: Policy> BlackjackEnv<S, P> {
    /// Applies one player action.
    ///
    /// `Draw` adds a card to the player hand. `Stand` hands over to the dealer,
    /// who plays out their whole turn before this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NotStarted`] before the first [`reset`](Self::reset)
    /// and [`StepError::InvalidPhase`] once the episode is over. Nothing is
    /// mutated when an error is returned.
    pub fn step(&mut self, action: Action) -> Result<StepResult, StepError> {
        let episode = self.episode.as_mut().ok_or(StepError::NotStarted)?;
        if episode.phase != Phase::PlayerTurn {
            return Err(StepError::InvalidPhase);
        }

        let result = match action {
            Action::Draw => episode.hit(&mut self.source),
            Action::Stand => episode.play_dealer(&mut self.source, &self.dealer),
        };

        Ok(result)
    }

    /// Applies an action given by its raw index (0 = draw, 1 = stand).
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidAction`] for any index other than 0 or 1,
    /// whatever the current phase, and otherwise the errors of
    /// [`step`](Self::step).
    pub fn step_raw(&mut self, action: i64) -> Result<StepResult, StepError> {
        let action = Action::try_from(action)?;
        self.step(action)
    }
}
