//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::deck::{Category, Deck, Flashcard};
use crate::core::state::App;

/// Three capitals, a single science card, and an empty category.
pub fn sample_deck() -> Deck {
    Deck::new(vec![
        Category {
            name: "Capitals".to_string(),
            cards: vec![
                Flashcard::new("France", "Paris"),
                Flashcard::new("Japan", "Tokyo"),
                Flashcard::new("Italy", "Rome"),
            ],
        },
        Category {
            name: "Science".to_string(),
            cards: vec![Flashcard::new("H2O", "Water")],
        },
        Category {
            name: "Empty".to_string(),
            cards: Vec::new(),
        },
    ])
}

/// The one-card deck from the quiz walkthrough.
pub fn capitals_deck() -> Deck {
    Deck::new(vec![Category {
        name: "Capitals".to_string(),
        cards: vec![Flashcard::new("France", "Paris")],
    }])
}

/// Creates a test App over `sample_deck()` with a fixed seed.
pub fn test_app() -> App {
    App::with_seed(sample_deck(), 2000, 99)
}
