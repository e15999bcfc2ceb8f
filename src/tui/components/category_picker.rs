//! # Category Picker Component
//!
//! Overlay for choosing a category. Opened with Ctrl+O, and on startup when
//! no category was given. The first entry is the "Select Category"
//! placeholder, which clears the selection.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState`
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::tui::event::TuiEvent;

/// Persistent state for the category picker overlay.
pub struct CategoryPickerState {
    /// Placeholder first, then categories in deck order.
    pub options: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    /// `active` preselects the matching category, if any.
    pub fn new(options: Vec<String>, active: Option<&str>) -> Self {
        let selected = active
            .and_then(|name| options.iter().skip(1).position(|o| o == name))
            .map(|i| i + 1)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            options,
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a PickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if !self.options.is_empty() {
                    self.selected = (self.selected + 1).min(self.options.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => {
                let choice = match self.selected {
                    0 => None,
                    i => self.options.get(i).cloned(),
                };
                Some(PickerEvent::Select(choice))
            }
            _ => None,
        }
    }
}

/// Events emitted by the category picker.
#[derive(Debug, PartialEq, Eq)]
pub enum PickerEvent {
    /// `None` when the placeholder was chosen.
    Select(Option<String>),
    Dismiss,
}

/// Transient render wrapper for the category picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if i == 0 {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(name.clone(), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn options() -> Vec<String> {
        ["Select Category", "Capitals", "Science"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_preselects_active_category() {
        let state = CategoryPickerState::new(options(), Some("Science"));
        assert_eq!(state.selected, 2);
        let state = CategoryPickerState::new(options(), None);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = CategoryPickerState::new(options(), None);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_select_category_and_placeholder() {
        let mut state = CategoryPickerState::new(options(), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PickerEvent::Select(None))
        );
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PickerEvent::Select(Some("Capitals".to_string())))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(PickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_lists_options() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CategoryPickerState::new(options(), None);

        terminal
            .draw(|f| {
                CategoryPicker::new(&mut state).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Categories"));
        assert!(text.contains("Select Category"));
        assert!(text.contains("Capitals"));
    }
}
