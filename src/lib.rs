//! A simplified blackjack environment for reinforcement learning, with
//! optional `no_std` support.
//!
//! The crate provides a [`BlackjackEnv`] type with the usual reset/step loop:
//! the agent sees its own hand and the dealer's first card, chooses to draw or
//! stand, and receives a reward of -1, 0 or 1 when the episode ends. The
//! dealer's turn is played out automatically by a [`Policy`].
//!
//! # Example
//!
//! ```
//! use bjenv::{Action, BlackjackEnv, EnvOptions};
//!
//! let mut env = BlackjackEnv::new(EnvOptions::default(), 42);
//! let _observation = env.reset();
//! let step = env.step(Action::Stand).unwrap();
//! assert!(step.terminal);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod env;
pub mod error;
pub mod game;
pub mod hand;
pub mod observation;
pub mod options;
pub mod policy;
pub mod result;

// Re-export main types
pub use action::Action;
pub use card::{Card, CardSource, MAX_CARD_VALUE, MAX_RANK, RandomSource, StackedSource};
pub use env::Environment;
pub use error::{CardError, StepError};
pub use game::{BlackjackEnv, Phase};
pub use hand::{BUST_LIMIT, Hand, best_point};
pub use observation::Observation;
pub use options::EnvOptions;
pub use policy::{DEALER_STANDS_ON, DealerPolicy, Policy};
pub use result::{Info, Outcome, StepResult};
