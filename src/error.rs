//! Error types for environment operations.

use thiserror::Error;

/// Errors that can occur when stepping the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The raw action is outside the action space.
    #[error("invalid action {0}, expected 0 (draw) or 1 (stand)")]
    InvalidAction(i64),
    /// The action index is outside the action space.
    #[error("invalid action index {0}, expected 0 (draw) or 1 (stand)")]
    InvalidActionIndex(usize),
    /// The action is not allowed in the current phase.
    #[error("invalid phase for this action")]
    InvalidPhase,
    /// No episode has been started with `reset`.
    #[error("environment has not been reset")]
    NotStarted,
}

/// Errors that can occur when building cards or card sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=13`.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
    /// A stacked source needs at least one card.
    #[error("card source is empty")]
    EmptySource,
}
