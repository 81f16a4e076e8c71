use alloc::collections::VecDeque;
use tracing::{Level, event};

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
use crate::error::BuildError;
use crate::options::SuitSprites;

use super::Deck;

impl<V: Clone> Deck<V> {
    /// Builds a fresh 24-card deck, discarding whatever the deck held.
    ///
    /// Suits are laid down clubs, diamonds, hearts, spades; within a suit the
    /// ranks run nine, ten, jack, queen, king, ace, each paired with the
    /// visual reference at the same position in `sprites`. If the options ask
    /// for it, the new deck is shuffled before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if a suit is missing from `sprites` or does not have
    /// exactly six references. The deck is not modified in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use thunee::{Deck, DeckState, SuitSprites};
    ///
    /// let mut deck = Deck::new(1);
    /// deck.build(&SuitSprites::blank()).unwrap();
    /// assert_eq!(deck.remaining(), 24);
    /// assert_eq!(deck.state(), DeckState::Full);
    /// ```
    pub fn build(&mut self, sprites: &SuitSprites<V>) -> Result<(), BuildError> {
        let cards = Self::lay_out(sprites).inspect_err(|err| {
            event!(Level::WARN, %err, "deck build rejected");
        })?;

        self.cards = cards;
        event!(Level::DEBUG, cards = self.cards.len(), "deck built");

        if self.options.shuffle_on_build {
            self.shuffle();
        }

        Ok(())
    }

    /// Lays out all suits in canonical order, validating each before use.
    fn lay_out(sprites: &SuitSprites<V>) -> Result<VecDeque<Card<V>>, BuildError> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            let refs = sprites.get(suit).ok_or(BuildError::MissingSuit { suit })?;
            if refs.len() != RANKS_PER_SUIT {
                return Err(BuildError::WrongSpriteCount {
                    suit,
                    expected: RANKS_PER_SUIT,
                    found: refs.len(),
                });
            }

            cards.extend(
                Rank::ALL
                    .into_iter()
                    .zip(refs)
                    .map(|(rank, visual_ref)| Card::new(suit, rank, visual_ref.clone())),
            );
        }

        Ok(cards)
    }
}
