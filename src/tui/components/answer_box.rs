//! # AnswerBox Component
//!
//! Single-line text input for answers. Hints write into the same buffer, so
//! the player can type over the revealed letters.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `enabled` is a prop from the
//! application state: while feedback is showing (or there is no card), the
//! box ignores edits and renders dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the AnswerBox
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    ContentChanged,
}

pub struct AnswerBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether edits are accepted (Prop)
    pub enabled: bool,
    /// Byte offset of the cursor in `buffer`, always on a char boundary.
    cursor: usize,
}

impl Default for AnswerBox {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            enabled: true,
            cursor: 0,
        }
    }

    /// Replace the whole buffer (used for hint text) and park the cursor at the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Component for AnswerBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Answer ");
        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(style);
        frame.render_widget(input, area);

        if self.enabled {
            let before = self.buffer[..self.cursor].width() as u16;
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1 + before).min(max_x);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for AnswerBox {
    type Event = AnswerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if !self.enabled {
            return None;
        }

        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(AnswerEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Answers are single-line.
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &line);
                self.cursor += line.len();
                Some(AnswerEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(AnswerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_boundary();
                    self.buffer.drain(self.cursor..next);
                    Some(AnswerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = self.prev_boundary();
                AnswerEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = self.next_boundary();
                AnswerEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                AnswerEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                AnswerEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    None
                } else {
                    Some(AnswerEvent::Submit(self.buffer.clone()))
                }
            }
            _ => None,
        }
    }
}
