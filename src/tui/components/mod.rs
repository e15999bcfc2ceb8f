//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: score, category, status
//! - `QuestionCard`: question / feedback panel
//! - `StatsBar`: remaining / correct / wrong / percent
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `AnswerBox`: answer input, also receives hint text
//! - `CategoryPicker`: category overlay
//!
//! Components receive external data as props, not by reaching into `App`.
//! This makes dependencies explicit and components testable on a
//! `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status line)
//! ├── question_card.rs    (Question / feedback panel)
//! ├── answer_box.rs       (Answer input)
//! ├── stats_bar.rs        (Bottom counters)
//! └── category_picker.rs  (Category overlay)
//! ```

pub mod answer_box;
pub mod category_picker;
pub mod question_card;
pub mod stats_bar;
mod title_bar;

pub use answer_box::{AnswerBox, AnswerEvent};
pub use category_picker::{CategoryPicker, CategoryPickerState, PickerEvent};
pub use question_card::{QuestionCard, Tone};
pub use stats_bar::StatsBar;
pub use title_bar::TitleBar;
