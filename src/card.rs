//! Card types and Thunee scoring.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the order a deck is built.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

/// Card rank. Thunee plays with nine through ace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, in the order each suit is built.
    pub const ALL: [Self; RANKS_PER_SUIT] = [
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the Thunee point value of this rank.
    ///
    /// ```
    /// use thunee::Rank;
    ///
    /// assert_eq!(Rank::Jack.point_value(), 30);
    /// assert_eq!(Rank::Queen.point_value(), 2);
    /// ```
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Jack => 30,
            Self::Nine => 20,
            Self::Ace => 11,
            Self::Ten => 10,
            Self::King => 3,
            Self::Queen => 2,
        }
    }
}

/// A playing card.
///
/// `V` is the visual reference handed in by the presentation layer (a sprite
/// handle, an asset path, ...). The card stores it and gives it back; it is
/// never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card<V = ()> {
    suit: Suit,
    rank: Rank,
    visual_ref: V,
}

impl<V> Card<V> {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, visual_ref: V) -> Self {
        Self {
            suit,
            rank,
            visual_ref,
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The visual reference supplied when the card was built.
    #[must_use]
    pub const fn visual_ref(&self) -> &V {
        &self.visual_ref
    }

    /// Consumes the card and returns its visual reference.
    #[must_use]
    pub fn into_visual_ref(self) -> V {
        self.visual_ref
    }

    /// Returns the Thunee point value of this card. Depends on rank only.
    #[must_use]
    pub const fn point_value(&self) -> u8 {
        self.rank.point_value()
    }

    /// Sums the point values of `cards`.
    ///
    /// ```
    /// use thunee::{Card, Rank, Suit};
    ///
    /// let won = [
    ///     Card::new(Suit::Hearts, Rank::Jack, ()),
    ///     Card::new(Suit::Spades, Rank::Nine, ()),
    /// ];
    /// assert_eq!(Card::total_points(&won), 50);
    /// ```
    #[must_use]
    pub fn total_points(cards: &[Self]) -> u32 {
        cards.iter().map(|card| u32::from(card.point_value())).sum()
    }
}

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = 6;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS_PER_SUIT;
