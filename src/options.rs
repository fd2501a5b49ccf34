//! Environment configuration options.

use crate::policy::{DEALER_STANDS_ON, DealerPolicy};

/// Configuration options for a blackjack environment.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjenv::EnvOptions;
///
/// let options = EnvOptions::default().with_dealer_stands_on(18);
/// assert_eq!(options.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvOptions {
    /// Total at which the built-in dealer stops drawing.
    pub dealer_stands_on: u8,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
        }
    }
}

impl EnvOptions {
    /// Sets the total at which the built-in dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Builds the dealer policy described by these options.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy::new().with_stands_on(self.dealer_stands_on)
    }
}
