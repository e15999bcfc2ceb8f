//! # Application State
//!
//! Core business state for quizdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── quiz: QuizSession             // deck, queues, counters
//! ├── feedback: Option<Feedback>    // last graded answer, until the next advance
//! ├── status_message: String        // status bar text
//! └── feedback_delay: Duration      // how long feedback stays up
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::quiz::{Phase, QuizSession};

/// First entry of the category list; choosing it clears the selection.
pub const PLACEHOLDER_CATEGORY: &str = "Select Category";

pub const HINT_RULE: &str =
    "Every hint opens one letter. After two hints, the card counts as wrong.";

/// What the player sees between grading an answer and the next card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct { awarded: u32 },
    Wrong { correct_answer: String },
}

pub struct App {
    pub quiz: QuizSession,
    pub feedback: Option<Feedback>,
    pub status_message: String,
    pub feedback_delay: Duration,
}

impl App {
    pub fn new(deck: Deck, feedback_delay_ms: u64) -> Self {
        Self::from_session(QuizSession::new(deck), feedback_delay_ms)
    }

    pub fn with_seed(deck: Deck, feedback_delay_ms: u64, seed: u64) -> Self {
        Self::from_session(QuizSession::with_seed(deck, seed), feedback_delay_ms)
    }

    pub fn from_config(deck: Deck, config: &ResolvedConfig) -> Self {
        Self::new(deck, config.feedback_delay_ms)
    }

    fn from_session(quiz: QuizSession, feedback_delay_ms: u64) -> Self {
        Self {
            quiz,
            feedback: None,
            status_message: String::from("Welcome to quizdeck!"),
            feedback_delay: Duration::from_millis(feedback_delay_ms),
        }
    }

    /// Category choices for the picker, placeholder first.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(PLACEHOLDER_CATEGORY)
            .chain(self.quiz.deck().category_names())
            .map(str::to_string)
            .collect()
    }

    /// Text for the question card.
    pub fn question_text(&self) -> String {
        if let Some(Feedback::Wrong { correct_answer }) = &self.feedback {
            return format!("Correct Answer: {correct_answer}");
        }
        match self.quiz.phase() {
            Phase::Unselected => "Pick a category to start".to_string(),
            Phase::GameOver => "Game Over!".to_string(),
            Phase::InProgress => self.quiz.current_question().unwrap_or_default().to_string(),
        }
    }

    /// Whether hint/pass/submit do anything right now.
    pub fn controls_enabled(&self) -> bool {
        self.feedback.is_none() && self.quiz.current_card().is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to quizdeck!");
        assert!(app.feedback.is_none());
        assert_eq!(app.feedback_delay, Duration::from_millis(2000));
        assert!(!app.controls_enabled());
    }

    #[test]
    fn test_category_options_start_with_placeholder() {
        let app = test_app();
        assert_eq!(
            app.category_options(),
            vec!["Select Category", "Capitals", "Science", "Empty"]
        );
    }

    #[test]
    fn test_question_text_follows_phase() {
        let mut app = test_app();
        assert_eq!(app.question_text(), "Pick a category to start");

        app.quiz.select_category(Some("Science")).unwrap();
        assert_eq!(app.question_text(), "H2O");

        app.feedback = Some(Feedback::Wrong {
            correct_answer: "Water".to_string(),
        });
        assert_eq!(app.question_text(), "Correct Answer: Water");

        app.feedback = None;
        app.quiz.select_category(Some("Empty")).unwrap();
        assert_eq!(app.question_text(), "Game Over!");
    }
}
