//! # Deck
//!
//! The flashcard deck: category name → ordered list of question/answer pairs.
//!
//! The deck is read once at startup and never mutated afterwards. The file is
//! a JSON object whose keys are category names, in display order:
//!
//! ```json
//! {
//!   "Capitals": [
//!     { "question": "France", "answer": "Paris" },
//!     { "question": "Japan",  "answer": "Tokyo" }
//!   ]
//! }
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A single question/answer pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A named, ordered group of flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub cards: Vec<Flashcard>,
}

/// All categories, in the order they appear in the deck file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    categories: Vec<Category>,
}

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// The file parsed but holds no categories.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck parse error: {e}"),
            DeckError::Empty => write!(f, "deck contains no categories"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Io(e) => Some(e),
            DeckError::Parse(e) => Some(e),
            DeckError::Empty => None,
        }
    }
}

impl Deck {
    /// Build a deck from already-ordered categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
        let deck = Self::from_json_str(&contents)?;
        info!(
            "Loaded deck from {} ({} categories, {} cards)",
            path.display(),
            deck.categories.len(),
            deck.total_cards()
        );
        Ok(deck)
    }

    /// Parse a deck from JSON text. Key order in the object is kept.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(DeckError::Parse)?;

        let mut categories = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let cards: Vec<Flashcard> = serde_json::from_value(value).map_err(DeckError::Parse)?;
            debug!("Category '{}': {} cards", name, cards.len());
            categories.push(Category { name, cards });
        }

        if categories.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in deck order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn cards(&self, category: &str) -> Option<&[Flashcard]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.cards.as_slice())
    }

    pub fn total_cards(&self) -> usize {
        self.categories.iter().map(|c| c.cards.len()).sum()
    }
}
