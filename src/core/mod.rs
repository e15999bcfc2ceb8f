//! # Core Application Logic
//!
//! This module contains quizdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (cards)         │
//!                    │  • QuizSession (rules)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No timers. No UI.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: `Deck` and `Flashcard`, loaded from JSON
//! - [`hint`]: letter-by-letter answer masks
//! - [`quiz`]: `QuizSession`, the card queues and scoring
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod deck;
pub mod hint;
pub mod quiz;
pub mod state;
