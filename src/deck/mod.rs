//! Deck state and draw operations.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque::Iter;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{Level, event};

use crate::card::{Card, DECK_SIZE};
use crate::options::DeckOptions;

mod build;
mod shuffle;
pub mod state;

pub use state::DeckState;

/// A Thunee deck.
///
/// The deck owns its cards and a seeded random number generator. The top of
/// the deck is the front of the sequence: [`Deck::draw`] takes from there and
/// [`Deck::peek`] lists it first.
///
/// A new deck is empty; call [`Deck::build`] to fill it.
#[derive(Debug, Clone)]
pub struct Deck<V = ()> {
    /// Cards in the deck, top first.
    cards: VecDeque<Card<V>>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl<V> Deck<V> {
    /// Creates an empty deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use thunee::{Deck, DeckState};
    ///
    /// let deck: Deck = Deck::new(42);
    /// assert_eq!(deck.state(), DeckState::Empty);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_options(DeckOptions::default().with_seed(seed))
    }

    /// Creates an empty deck with the given options.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        Self {
            cards: VecDeque::with_capacity(DECK_SIZE),
            options,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        }
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Draws the top card.
    ///
    /// Returns `None` if the deck is empty; the deck is left unchanged.
    pub fn draw(&mut self) -> Option<Card<V>> {
        let card = self.cards.pop_front();
        if card.is_none() {
            event!(Level::WARN, "draw from an empty deck");
        }
        card
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn (or the deck was never built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DeckState {
        match self.cards.len() {
            0 => DeckState::Empty,
            DECK_SIZE => DeckState::Full,
            _ => DeckState::Draining,
        }
    }

    /// Iterates over the remaining cards, top first.
    pub fn iter(&self) -> Iter<'_, Card<V>> {
        self.cards.iter()
    }

    /// Returns a copy of the remaining cards, top first.
    #[must_use]
    pub fn peek(&self) -> Vec<Card<V>>
    where
        V: Clone,
    {
        self.cards.iter().cloned().collect()
    }
}

impl<V> Default for Deck<V> {
    fn default() -> Self {
        Self::with_options(DeckOptions::default())
    }
}

impl<'a, V> IntoIterator for &'a Deck<V> {
    type Item = &'a Card<V>;
    type IntoIter = Iter<'a, Card<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
