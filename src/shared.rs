//! A deck guarded for single-writer access from several call sites.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{Deck, DeckState};
use crate::error::BuildError;
use crate::options::{DeckOptions, SuitSprites};

#[cfg(feature = "std")]
type Guarded<T> = std::sync::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guarded<T> = spin::Mutex<T>;

#[cfg(feature = "std")]
fn acquire<T>(guarded: &Guarded<T>) -> std::sync::MutexGuard<'_, T> {
    // A panic mid-operation cannot leave a deck half-updated, so a poisoned
    // lock is still safe to use.
    guarded
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn acquire<T>(guarded: &Guarded<T>) -> spin::MutexGuard<'_, T> {
    guarded.lock()
}

/// A [`Deck`] behind a per-instance lock.
///
/// Each method takes the lock for the duration of one deck operation. Use
/// [`SharedDeck::with_deck`] when several operations must happen without
/// another caller drawing in between.
///
/// One `SharedDeck` belongs to one game session; tables that need separate
/// decks create separate instances.
#[derive(Debug)]
pub struct SharedDeck<V = ()> {
    deck: Guarded<Deck<V>>,
}

impl<V> SharedDeck<V> {
    /// Wraps an existing deck.
    #[must_use]
    pub const fn new(deck: Deck<V>) -> Self {
        Self {
            deck: Guarded::new(deck),
        }
    }

    /// Creates an empty shared deck with the given options.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        Self::new(Deck::with_options(options))
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&self) {
        acquire(&self.deck).shuffle();
    }

    /// Draws the top card, or `None` if the deck is empty.
    pub fn draw(&self) -> Option<Card<V>> {
        acquire(&self.deck).draw()
    }

    /// Returns the number of cards remaining.
    pub fn remaining(&self) -> usize {
        acquire(&self.deck).remaining()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> DeckState {
        acquire(&self.deck).state()
    }

    /// Runs `f` with exclusive access to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use thunee::{Deck, SharedDeck, SuitSprites};
    ///
    /// let shared = SharedDeck::new(Deck::new(3));
    /// let hand = shared.with_deck(|deck| {
    ///     deck.build(&SuitSprites::blank()).unwrap();
    ///     deck.shuffle();
    ///     (0..6).filter_map(|_| deck.draw()).collect::<Vec<_>>()
    /// });
    /// assert_eq!(hand.len(), 6);
    /// assert_eq!(shared.remaining(), 18);
    /// ```
    pub fn with_deck<R>(&self, f: impl FnOnce(&mut Deck<V>) -> R) -> R {
        f(&mut acquire(&self.deck))
    }

    /// Consumes the wrapper and returns the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck<V> {
        #[cfg(feature = "std")]
        {
            self.deck
                .into_inner()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
        }
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        {
            self.deck.into_inner()
        }
    }
}

impl<V: Clone> SharedDeck<V> {
    /// Builds a fresh deck in place.
    ///
    /// # Errors
    ///
    /// Returns an error if `sprites` is malformed; the deck is unchanged.
    pub fn build(&self, sprites: &SuitSprites<V>) -> Result<(), BuildError> {
        acquire(&self.deck).build(sprites)
    }

    /// Returns a copy of the remaining cards, top first.
    pub fn peek(&self) -> Vec<Card<V>> {
        acquire(&self.deck).peek()
    }
}

impl<V> From<Deck<V>> for SharedDeck<V> {
    fn from(deck: Deck<V>) -> Self {
        Self::new(deck)
    }
}
