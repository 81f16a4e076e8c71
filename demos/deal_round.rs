//! Deals a round of Thunee hands from a freshly shuffled deck.

use std::time::{SystemTime, UNIX_EPOCH};

use thunee::{Card, Deck, DeckOptions, Suit, SuitSprites};

const PLAYERS: usize = 4;
const HAND_SIZE: usize = 6;

fn sprite_names() -> SuitSprites<String> {
    Suit::ALL.into_iter().fold(SuitSprites::new(), |sprites, suit| {
        let refs = ["9", "10", "J", "Q", "K", "A"].map(|rank| format!("{rank}_of_{suit:?}"));
        sprites.with_suit(suit, refs)
    })
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DeckOptions::default()
        .with_seed(seed)
        .with_shuffle_on_build(true);
    let mut deck = Deck::with_options(options);

    if let Err(err) = deck.build(&sprite_names()) {
        println!("Build error: {err}");
        return;
    }

    let mut hands: Vec<Vec<Card<String>>> = vec![Vec::new(); PLAYERS];
    for _ in 0..HAND_SIZE {
        for hand in &mut hands {
            let Some(card) = deck.draw() else {
                println!("Deck ran out while dealing.");
                return;
            };
            hand.push(card);
        }
    }

    for (seat, hand) in hands.iter().enumerate() {
        let names: Vec<&str> = hand.iter().map(|card| card.visual_ref().as_str()).collect();
        println!(
            "Player {}: {} ({} points)",
            seat + 1,
            names.join(", "),
            Card::total_points(hand)
        );
    }

    println!("Cards left: {}", deck.remaining());
    if deck.draw().is_none() {
        println!("Deck is empty.");
    }
}
