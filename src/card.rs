//! Card values and card sources.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, RngCore};

use crate::error::CardError;

/// Highest rank that can be drawn (13 = King).
pub const MAX_RANK: u8 = 13;

/// Highest point value a single card can carry.
pub const MAX_CARD_VALUE: u8 = 10;

/// A card, reduced to its point value.
///
/// Values run from 1 to 10; 1 is an ace and face cards count as 10. Suits are
/// irrelevant to scoring and are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// The ace.
    pub const ACE: Self = Self(1);

    /// Creates a card from a rank in `1..=13`, clamping face cards to 10.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::Card;
    ///
    /// assert_eq!(Card::from_rank(12).unwrap().value(), 10);
    /// assert!(Card::from_rank(14).is_err());
    /// ```
    pub const fn from_rank(rank: u8) -> Result<Self, CardError> {
        match rank {
            1..=MAX_CARD_VALUE => Ok(Self(rank)),
            11..=MAX_RANK => Ok(Self(MAX_CARD_VALUE)),
            _ => Err(CardError::InvalidRank(rank)),
        }
    }

    /// Returns the face value (1 for an ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.0 == 1
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::from_rank(rank)
    }
}

/// Supplies cards to the environment.
///
/// Every draw is independent; implementations do not model a finite shoe.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}

/// Draws a uniformly random rank in `1..=13` from the wrapped generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: RngCore> RandomSource<R> {
    /// Wraps a random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> CardSource for RandomSource<R> {
    fn draw(&mut self) -> Card {
        let rank = self.rng.random_range(1..=MAX_RANK);
        Card(rank.min(MAX_CARD_VALUE))
    }
}

/// Deals a fixed sequence of cards in order, starting over once exhausted.
///
/// Useful for scripting exact episodes in tests.
#[derive(Debug, Clone)]
pub struct StackedSource {
    cards: Vec<Card>,
    next: usize,
}

impl StackedSource {
    /// Creates a source that deals `cards` front to back.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::EmptySource`] if no cards are given.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, CardError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        if cards.is_empty() {
            return Err(CardError::EmptySource);
        }

        Ok(Self { cards, next: 0 })
    }

    /// Creates a source from raw ranks.
    ///
    /// # Errors
    ///
    /// Returns an error if any rank is outside `1..=13` or no ranks are given.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{CardSource, StackedSource};
    ///
    /// let mut source = StackedSource::from_ranks(&[1, 13]).unwrap();
    /// assert_eq!(source.draw().value(), 1);
    /// assert_eq!(source.draw().value(), 10);
    /// assert_eq!(source.draw().value(), 1);
    /// ```
    pub fn from_ranks(ranks: &[u8]) -> Result<Self, CardError> {
        let cards = ranks
            .iter()
            .map(|&rank| Card::from_rank(rank))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    /// Returns the number of cards dealt since the sequence last started over.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.next
    }
}

impl CardSource for StackedSource {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next];
        self.next = (self.next + 1) % self.cards.len();
        card
    }
}
