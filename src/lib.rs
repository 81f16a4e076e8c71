//! A Thunee card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that builds the 24-card Thunee deck,
//! shuffles it with a seeded RNG, and deals cards from the top. Each card
//! carries a caller-supplied visual reference and knows its Thunee point
//! value.
//!
//! # Example
//!
//! ```
//! use thunee::{Deck, Rank, Suit, SuitSprites};
//!
//! let mut deck = Deck::new(42);
//! deck.build(&SuitSprites::blank()).unwrap();
//!
//! let top = deck.draw().unwrap();
//! assert_eq!((top.suit(), top.rank()), (Suit::Clubs, Rank::Nine));
//! assert_eq!(top.point_value(), 20);
//!
//! deck.shuffle();
//! assert_eq!(deck.remaining(), 23);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shared;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
pub use deck::{Deck, DeckState};
pub use error::BuildError;
pub use options::{DeckOptions, SuitSprites};
pub use shared::SharedDeck;
