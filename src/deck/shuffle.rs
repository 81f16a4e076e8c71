use rand::Rng;
use tracing::{Level, event};

use super::Deck;

/// Fisher-Yates: walk from the last index down to 1, swapping each slot with
/// a uniformly chosen slot in `0..=i`.
fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

impl<V> Deck<V> {
    /// Shuffles the remaining cards in place using the deck's own RNG.
    ///
    /// Only cards still in the deck are rearranged. Does nothing when fewer
    /// than two cards remain.
    pub fn shuffle(&mut self) {
        fisher_yates(self.cards.make_contiguous(), &mut self.rng);
        event!(Level::TRACE, cards = self.cards.len(), "deck shuffled");
    }

    /// Shuffles the remaining cards in place using the supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fisher_yates(self.cards.make_contiguous(), rng);
        event!(Level::TRACE, cards = self.cards.len(), "deck shuffled");
    }
}
