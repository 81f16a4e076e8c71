//! Deck configuration options.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Suit;

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use thunee::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_seed(7)
///     .with_shuffle_on_build(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Seed for the deck's random number generator.
    pub seed: u64,
    /// Whether `build` shuffles the deck before returning.
    pub shuffle_on_build: bool,
}

impl DeckOptions {
    /// Sets the RNG seed.
    ///
    /// # Example
    ///
    /// ```
    /// use thunee::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether `build` shuffles the deck before returning.
    ///
    /// # Example
    ///
    /// ```
    /// use thunee::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_build(true);
    /// assert_eq!(options.shuffle_on_build, true);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_build(mut self, shuffle: bool) -> Self {
        self.shuffle_on_build = shuffle;
        self
    }
}

/// Visual references for each suit, in rank order nine, ten, jack, queen,
/// king, ace.
///
/// ```
/// use thunee::{Suit, SuitSprites};
///
/// let sprites = SuitSprites::new()
///     .with_suit(Suit::Clubs, ["9C", "TC", "JC", "QC", "KC", "AC"])
///     .with_suit(Suit::Hearts, ["9H", "TH", "JH", "QH", "KH", "AH"]);
/// assert_eq!(sprites.get(Suit::Clubs).map(<[_]>::len), Some(6));
/// assert!(sprites.get(Suit::Spades).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SuitSprites<V> {
    by_suit: HashMap<Suit, Vec<V>>,
}

impl<V> SuitSprites<V> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_suit: HashMap::new(),
        }
    }

    /// Sets the references for `suit`, replacing any earlier entry.
    #[must_use]
    pub fn with_suit(mut self, suit: Suit, refs: impl IntoIterator<Item = V>) -> Self {
        self.insert(suit, refs);
        self
    }

    /// Sets the references for `suit`, replacing any earlier entry.
    pub fn insert(&mut self, suit: Suit, refs: impl IntoIterator<Item = V>) {
        self.by_suit.insert(suit, refs.into_iter().collect());
    }

    /// Returns the references for `suit`, if any were supplied.
    #[must_use]
    pub fn get(&self, suit: Suit) -> Option<&[V]> {
        self.by_suit.get(&suit).map(Vec::as_slice)
    }
}

impl<V> Default for SuitSprites<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl SuitSprites<()> {
    /// Mapping with a unit placeholder for every card, for callers that have
    /// no visual layer.
    #[must_use]
    pub fn blank() -> Self {
        Suit::ALL.into_iter().fold(Self::new(), |sprites, suit| {
            sprites.with_suit(suit, [(); crate::card::RANKS_PER_SUIT])
        })
    }
}
