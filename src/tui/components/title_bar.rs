//! # TitleBar Component
//!
//! Top line of the screen: running score, active category, and the latest
//! status message.
//!
//! Stateless: every field is a prop copied from `App` each frame.
//!
//! ```text
//! SCORE: 015 | Capitals | Correct! +5
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub score: u32,
    pub category: Option<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(score: u32, category: Option<String>, status_message: String) -> Self {
        Self {
            score,
            category,
            status_message,
        }
    }

    /// Score with three-digit zero padding, e.g. `SCORE: 005`.
    pub fn score_text(&self) -> String {
        format!("SCORE: {:03}", self.score)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.score_text(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(category) = &self.category {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                category.clone(),
                Style::default().fg(Color::Cyan),
            ));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.clone()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
