//! # StatsBar Component
//!
//! Bottom counters: remaining, correct, wrong, percent correct.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::quiz::Statistics;
use crate::tui::component::Component;

pub struct StatsBar {
    pub stats: Statistics,
}

impl StatsBar {
    pub fn new(stats: Statistics) -> Self {
        Self { stats }
    }

    pub fn labels(&self) -> [String; 4] {
        [
            format!("{} Cards Remaining", self.stats.remaining),
            format!("{} Cards Correct", self.stats.correct),
            format!("{} Cards Wrong", self.stats.wrong),
            format!("%{:.0} Correct", self.stats.percent_correct),
        ]
    }
}

impl Component for StatsBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        let colors = [Color::Gray, Color::Green, Color::Red, Color::Yellow];
        for ((label, column), color) in self.labels().into_iter().zip(columns.iter()).zip(colors) {
            frame.render_widget(
                Paragraph::new(label).style(Style::default().fg(color)),
                *column,
            );
        }
    }
}
