//! Deck lifecycle state.

/// Where a deck is in its build/draw lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// No cards: never built, or every card has been drawn.
    Empty,
    /// Freshly built, nothing drawn yet.
    Full,
    /// At least one card drawn, at least one remaining.
    Draining,
}
