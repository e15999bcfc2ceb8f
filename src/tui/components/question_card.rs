//! # QuestionCard Component
//!
//! The big panel in the middle of the screen. Shows the current question,
//! or the correct answer after a miss, or "Game Over!".
//!
//! The colors carry the feedback: white while answering, green after a
//! correct answer, red after a wrong one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::Feedback;
use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Correct,
    Wrong,
}

impl Tone {
    pub fn from_feedback(feedback: Option<&Feedback>) -> Self {
        match feedback {
            None => Tone::Neutral,
            Some(Feedback::Correct { .. }) => Tone::Correct,
            Some(Feedback::Wrong { .. }) => Tone::Wrong,
        }
    }

    fn style(self) -> Style {
        match self {
            Tone::Neutral => Style::default().fg(Color::Black).bg(Color::White),
            Tone::Correct => Style::default().fg(Color::White).bg(Color::Green),
            Tone::Wrong => Style::default().fg(Color::White).bg(Color::Red),
        }
    }
}

pub struct QuestionCard {
    pub text: String,
    pub tone: Tone,
}

impl QuestionCard {
    pub fn new(text: String, tone: Tone) -> Self {
        Self { text, tone }
    }
}

impl Component for QuestionCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = self.tone.style();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Question ")
            .style(style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(self.text.as_str())
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        // Center the text block vertically inside the card.
        let height = (paragraph.line_count(inner.width) as u16).min(inner.height);
        let [text_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(paragraph, text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_tone_from_feedback() {
        assert_eq!(Tone::from_feedback(None), Tone::Neutral);
        assert_eq!(
            Tone::from_feedback(Some(&Feedback::Correct { awarded: 10 })),
            Tone::Correct
        );
        assert_eq!(
            Tone::from_feedback(Some(&Feedback::Wrong {
                correct_answer: "Paris".to_string()
            })),
            Tone::Wrong
        );
    }

    #[test]
    fn test_render_shows_text_with_tone_color() {
        let backend = TestBackend::new(40, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut card = QuestionCard::new("Correct Answer: Paris".to_string(), Tone::Wrong);

        terminal
            .draw(|f| {
                card.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Correct Answer: Paris"));
        assert_eq!(buffer[(20, 3)].bg, Color::Red);
    }
}
