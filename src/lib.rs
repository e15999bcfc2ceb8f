//! quizdeck library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::deck::{Deck, DeckError, Flashcard};
pub use crate::core::quiz::{Outcome, Phase, QuizError, QuizSession, Statistics};
