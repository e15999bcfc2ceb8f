//! # Quiz Session
//!
//! The quiz state machine for one category run.
//!
//! ```text
//!              select(Some(c))                 advance, both queues empty
//! Unselected ─────────────────▶ InProgress ───────────────────────────▶ GameOver
//!     ▲                          │    ▲                                    │
//!     └──── select(None) ────────┘    └────────── select(Some(c)) ─────────┘
//! ```
//!
//! Cards live in exactly one of two queues:
//!
//! - `pending`: still to be answered correctly this pass. The current card is
//!   `pending[current]`.
//! - `retry`: passed, or failed after two or more hints. Once `pending` runs
//!   dry, `retry` is moved back into `pending` in one piece.
//!
//! Nothing here sleeps or schedules. After [`QuizSession::submit_answer`] the
//! caller decides when to call [`QuizSession::advance`].

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::core::deck::{Deck, Flashcard};
use crate::core::hint;

pub const POINTS_NO_HINT: u32 = 10;
pub const POINTS_ONE_HINT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unselected,
    InProgress,
    GameOver,
}

/// Result of grading a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct {
        awarded: u32,
    },
    Wrong {
        correct_answer: String,
        /// The card was moved to the retry queue (two or more hints used).
        deferred: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub score: u32,
    pub correct: u32,
    pub wrong: u32,
    pub percent_correct: f64,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    UnknownCategory(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::UnknownCategory(name) => write!(f, "unknown category: {name}"),
        }
    }
}

impl std::error::Error for QuizError {}

pub struct QuizSession {
    deck: Deck,
    rng: StdRng,
    phase: Phase,
    category: Option<String>,
    pending: Vec<Flashcard>,
    retry: Vec<Flashcard>,
    current: Option<usize>,
    hints_used: u32,
    hint_text: String,
    score: u32,
    correct: u32,
    wrong: u32,
}

impl QuizSession {
    pub fn new(deck: Deck) -> Self {
        Self::with_rng(deck, StdRng::from_os_rng())
    }

    /// Deterministic session for tests and replays.
    pub fn with_seed(deck: Deck, seed: u64) -> Self {
        Self::with_rng(deck, StdRng::seed_from_u64(seed))
    }

    fn with_rng(deck: Deck, rng: StdRng) -> Self {
        Self {
            deck,
            rng,
            phase: Phase::Unselected,
            category: None,
            pending: Vec::new(),
            retry: Vec::new(),
            current: None,
            hints_used: 0,
            hint_text: String::new(),
            score: 0,
            correct: 0,
            wrong: 0,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Start a fresh run of `category`, or return to the unselected state
    /// when `None`. Unknown names are rejected without touching the session.
    pub fn select_category(&mut self, category: Option<&str>) -> Result<(), QuizError> {
        let cards = match category {
            Some(name) => Some(
                self.deck
                    .cards(name)
                    .ok_or_else(|| QuizError::UnknownCategory(name.to_string()))?
                    .to_vec(),
            ),
            None => None,
        };

        self.retry.clear();
        self.current = None;
        self.hints_used = 0;
        self.hint_text.clear();
        self.score = 0;
        self.correct = 0;
        self.wrong = 0;

        match cards {
            Some(cards) => {
                info!(
                    "Category selected: {} ({} cards)",
                    category.unwrap_or_default(),
                    cards.len()
                );
                self.category = category.map(str::to_string);
                self.pending = cards;
                self.phase = Phase::InProgress;
                self.advance(true);
            }
            None => {
                info!("Category selection cleared");
                self.category = None;
                self.pending.clear();
                self.phase = Phase::Unselected;
            }
        }
        Ok(())
    }

    /// Move to the next card, refilling `pending` from `retry` when it is
    /// empty. Enters [`Phase::GameOver`] when both queues are empty.
    pub fn advance(&mut self, randomize: bool) {
        if self.phase != Phase::InProgress {
            return;
        }

        if self.pending.is_empty() && !self.retry.is_empty() {
            debug!("Refilling pending with {} retry cards", self.retry.len());
            self.pending = std::mem::take(&mut self.retry);
        }

        self.hints_used = 0;
        self.hint_text.clear();

        if self.pending.is_empty() {
            info!(
                "Game over: score={} correct={} wrong={}",
                self.score, self.correct, self.wrong
            );
            self.current = None;
            self.phase = Phase::GameOver;
            return;
        }

        let len = self.pending.len();
        let next = if randomize {
            self.rng.random_range(0..len)
        } else {
            self.current.map_or(0, |i| (i + 1) % len)
        };
        self.current = Some(next);
        debug!("Advanced to card {} of {}", next, len);
    }

    /// Reveal one more letter of the current answer.
    ///
    /// `input` is the text the player currently has; a mismatched length is
    /// treated as fully masked. The hint counter goes up even when every
    /// letter is already showing.
    pub fn request_hint(&mut self, input: &str) -> Option<String> {
        let card = self.current_card()?;
        let answer = card.answer.clone();

        let (text, revealed) = hint::reveal_one(&answer, input, &mut self.rng);
        self.hints_used += 1;
        self.hint_text = text;
        debug!(
            "Hint {} requested (revealed={}, hidden={})",
            self.hints_used,
            revealed,
            hint::hidden_count(&self.hint_text)
        );
        Some(self.hint_text.clone())
    }

    /// Grade `text` against the current card.
    pub fn submit_answer(&mut self, text: &str) -> Option<Outcome> {
        let index = self.current?;
        let card = self.pending.get(index)?;

        let given = hint::strip_mask(text).to_lowercase();
        let expected = card.answer.to_lowercase();

        let outcome = if given == expected {
            let awarded = match self.hints_used {
                0 => POINTS_NO_HINT,
                1 => POINTS_ONE_HINT,
                _ => 0,
            };
            self.score += awarded;
            self.correct += 1;
            self.pending.remove(index);
            self.wrap_current(index);
            Outcome::Correct { awarded }
        } else {
            self.wrong += 1;
            let correct_answer = card.answer.clone();
            let deferred = self.hints_used > 1;
            if deferred {
                let card = self.pending.remove(index);
                self.retry.push(card);
            }
            self.wrap_current(index);
            Outcome::Wrong {
                correct_answer,
                deferred,
            }
        };

        info!(
            "Answer graded: {:?} (hints={}, score={})",
            outcome, self.hints_used, self.score
        );
        Some(outcome)
    }

    /// Skip the current card without penalty. It comes back on the next pass.
    pub fn pass_card(&mut self) -> bool {
        let Some(index) = self.current else {
            return false;
        };
        if index >= self.pending.len() {
            return false;
        }

        let card = self.pending.remove(index);
        debug!("Passed card: {}", card.question);
        self.retry.push(card);
        self.wrap_current(index);
        self.advance(true);
        true
    }

    pub fn statistics(&self) -> Statistics {
        let attempts = self.correct + self.wrong;
        let percent_correct = if attempts == 0 {
            0.0
        } else {
            100.0 * f64::from(self.correct) / f64::from(attempts)
        };
        Statistics {
            score: self.score,
            correct: self.correct,
            wrong: self.wrong,
            percent_correct,
            remaining: self.pending.len(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.current.and_then(|i| self.pending.get(i))
    }

    pub fn current_question(&self) -> Option<&str> {
        self.current_card().map(|c| c.question.as_str())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn hint_text(&self) -> &str {
        &self.hint_text
    }

    pub fn pending(&self) -> &[Flashcard] {
        &self.pending
    }

    pub fn retry(&self) -> &[Flashcard] {
        &self.retry
    }

    /// Keep `current` pointing into `pending` after a removal at `index`.
    fn wrap_current(&mut self, index: usize) {
        self.current = if self.pending.is_empty() {
            None
        } else {
            Some(index % self.pending.len())
        };
    }
}
