//! The discrete action space.

use crate::error::StepError;

/// An action available to the player (and to the dealer policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Draw = 0,
    /// Stop drawing.
    Stand = 1,
}

impl Action {
    /// Every action, in index order.
    pub const ALL: [Self; 2] = [Self::Draw, Self::Stand];

    /// Returns the raw index of the action.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i64> for Action {
    type Error = StepError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Draw),
            1 => Ok(Self::Stand),
            _ => Err(StepError::InvalidAction(value)),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = StepError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Draw),
            1 => Ok(Self::Stand),
            _ => Err(StepError::InvalidActionIndex(value)),
        }
    }
}
