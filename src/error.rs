//! Error types for deck operations.

use thiserror::Error;

use crate::card::Suit;

/// Errors that can occur while building a deck.
///
/// A failed build leaves the deck as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No visual references were supplied for a suit.
    #[error("no visual references supplied for {suit:?}")]
    MissingSuit {
        /// The suit with no entry.
        suit: Suit,
    },
    /// A suit was supplied with the wrong number of visual references.
    #[error("expected {expected} visual references for {suit:?}, found {found}")]
    WrongSpriteCount {
        /// The offending suit.
        suit: Suit,
        /// Required number of references (one per rank).
        expected: usize,
        /// Number of references supplied.
        found: usize,
    },
}
