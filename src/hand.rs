//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Point total above which a hand is bust.
pub const BUST_LIMIT: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
            value += 11;
        } else {
            value += usize::from(card.value());
        }
    }

    let limit = usize::from(BUST_LIMIT);
    while value > limit && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= limit;
    // Anything this large is bust already; cap instead of wrapping.
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best attainable point total for `cards`.
///
/// Aces count as 11 and are downgraded to 1 one at a time while the total is
/// over 21. The result can still exceed 21 when no ace is left to downgrade.
/// Totals above 255 are reported as 255.
///
/// # Example
///
/// ```
/// use bjenv::{Card, best_point};
///
/// let hand = [Card::ACE, Card::ACE, Card::from_rank(9).unwrap()];
/// assert_eq!(best_point(&hand), 21);
/// ```
#[must_use]
pub fn best_point(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// An ordered, append-only sequence of cards held by one party.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the best point total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        best_point(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
