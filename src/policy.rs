//! Decision policies mapping a point total to an action.

use crate::action::Action;

/// Total at which the default dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// A decision rule that maps a hand's best point total to an action.
///
/// The environment drives the dealer through this trait, so alternative
/// dealer strategies can be plugged in without touching the game loop.
pub trait Policy {
    /// Chooses an action for the given point total.
    fn act(&self, total: u8) -> Action;
}

impl<F: Fn(u8) -> Action> Policy for F {
    fn act(&self, total: u8) -> Action {
        self(total)
    }
}

/// Fixed-threshold dealer: draws below the threshold, stands at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerPolicy {
    stands_on: u8,
}

impl DealerPolicy {
    /// Creates the standard dealer, who stands on 17.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stands_on: DEALER_STANDS_ON,
        }
    }

    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{Action, DealerPolicy, Policy};
    ///
    /// let dealer = DealerPolicy::new().with_stands_on(18);
    /// assert_eq!(dealer.act(17), Action::Draw);
    /// assert_eq!(dealer.act(18), Action::Stand);
    /// ```
    #[must_use]
    pub const fn with_stands_on(mut self, total: u8) -> Self {
        self.stands_on = total;
        self
    }

    /// Returns the total at which the dealer stands.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for DealerPolicy {
    fn act(&self, total: u8) -> Action {
        if total < self.stands_on {
            Action::Draw
        } else {
            Action::Stand
        }
    }
}
