//! Environment engine and episode management.

use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::card::{CardSource, RandomSource};
use crate::env::Environment;
use crate::error::StepError;
use crate::hand::Hand;
use crate::observation::Observation;
use crate::options::EnvOptions;
use crate::policy::{DealerPolicy, Policy};
use crate::result::StepResult;

mod actions;
mod dealer;
pub mod state;

pub use state::Phase;

use state::Episode;

/// A single-player blackjack environment with a reset/step loop.
///
/// The environment owns its card source and the dealer's policy. Each caller
/// should own its own instance; episodes never share state.
#[derive(Clone)]
pub struct BlackjackEnv<S = RandomSource<ChaCha8Rng>, P = DealerPolicy> {
    /// Where cards come from.
    source: S,
    /// Decision rule driving the dealer's turn.
    dealer: P,
    /// Current episode, `None` until the first reset.
    episode: Option<Episode>,
}

impl<S, P> fmt::Debug for BlackjackEnv<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlackjackEnv")
            .field("episode", &self.episode)
            .finish_non_exhaustive()
    }
}

impl BlackjackEnv {
    /// Creates a new environment with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{BlackjackEnv, EnvOptions};
    ///
    /// let mut env = BlackjackEnv::new(EnvOptions::default(), 42);
    /// let observation = env.reset();
    /// assert_eq!(observation.player.len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: EnvOptions, seed: u64) -> Self {
        let source = RandomSource::new(ChaCha8Rng::seed_from_u64(seed));
        Self::with_source(options, source)
    }
}

impl<S: CardSource> BlackjackEnv<S> {
    /// Creates a new environment that draws from `source`.
    #[must_use]
    pub const fn with_source(options: EnvOptions, source: S) -> Self {
        Self::with_policy(source, options.dealer_policy())
    }
}

impl<S: CardSource, P: Policy> BlackjackEnv<S, P> {
    /// Creates a new environment with a custom dealer policy.
    #[must_use]
    pub const fn with_policy(source: S, dealer: P) -> Self {
        Self {
            source,
            dealer,
            episode: None,
        }
    }

    /// Starts a new episode, discarding the previous one.
    ///
    /// Deals two cards to the player and two to the dealer and returns the
    /// initial observation.
    pub fn reset(&mut self) -> Observation {
        let episode = Episode::deal(&mut self.source);
        let observation = episode.observation();
        self.episode = Some(episode);
        observation
    }

    /// Returns every action, in index order.
    #[must_use]
    pub const fn action_space(&self) -> &'static [Action] {
        &Action::ALL
    }

    /// Returns the current phase, or `None` before the first reset.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.episode.as_ref().map(|episode| episode.phase)
    }

    /// Returns whether the current episode is over.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase() == Some(Phase::Settled)
    }

    /// Returns the current observation, or `None` before the first reset.
    #[must_use]
    pub fn observation(&self) -> Option<Observation> {
        self.episode.as_ref().map(Episode::observation)
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn player_hand(&self) -> Option<&Hand> {
        self.episode.as_ref().map(|episode| &episode.player)
    }

    /// Returns the dealer's full hand once the episode is over.
    ///
    /// Returns `None` while the episode is still running, since only the
    /// dealer's first card may be seen before settlement.
    #[must_use]
    pub fn dealer_hand(&self) -> Option<&Hand> {
        self.episode
            .as_ref()
            .filter(|episode| episode.phase == Phase::Settled)
            .map(|episode| &episode.dealer)
    }

    /// Returns the dealer policy.
    #[must_use]
    pub const fn dealer(&self) -> &P {
        &self.dealer
    }

    /// Returns the card source.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: CardSource, P: Policy> Environment for BlackjackEnv<S, P> {
    type Observation = Observation;
    type Action = Action;
    type Step = StepResult;
    type Error = StepError;

    fn reset(&mut self) -> Observation {
        Self::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<StepResult, StepError> {
        Self::step(self, action)
    }

    fn action_space(&self) -> &'static [Action] {
        Self::action_space(self)
    }
}
