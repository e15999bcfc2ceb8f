//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Feedback Timer
//!
//! The core never waits. When `update()` returns `Effect::ScheduleAdvance`
//! the loop records a deadline `feedback_delay` from now and polls for input
//! no longer than that. Once the deadline passes it dispatches
//! `Action::Advance`. Enter skips the wait; picking a category drops it.
//!
//! ## Redraw Strategy
//!
//! Idle frames sleep up to 500ms and only redraw on events, resize, or
//! when the feedback deadline fires.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AnswerBox, AnswerEvent, CategoryPickerState, PickerEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub answer_box: AnswerBox,
    /// Category overlay (None = hidden)
    pub category_picker: Option<CategoryPickerState>,
    /// When to dispatch `Action::Advance` (None = no feedback showing)
    pub advance_at: Option<Instant>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            answer_box: AnswerBox::new(),
            category_picker: None,
            advance_at: None,
        }
    }

    pub fn open_category_picker(&mut self, app: &App) {
        self.category_picker = Some(CategoryPickerState::new(
            app.category_options(),
            app.quiz.category(),
        ));
    }

    /// Time until the feedback deadline, capped at the idle poll interval.
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.advance_at
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for answer editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Apply an action and carry out the effect it asks for.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    if matches!(action, Action::SelectCategory(_) | Action::Advance) {
        tui.advance_at = None;
    }

    let effect = update(app, action);
    debug!("Effect: {:?}", effect);
    match effect {
        Effect::None => {}
        Effect::ReplaceInput(text) => tui.answer_box.set_text(text),
        Effect::ClearInput => tui.answer_box.clear(),
        Effect::ScheduleAdvance => {
            tui.advance_at = Some(Instant::now() + app.feedback_delay);
        }
        Effect::Quit => return true,
    }
    false
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    if matches!(event, TuiEvent::ForceQuit) {
        return dispatch(app, tui, Action::Quit);
    }

    // When the picker is open, route all events to it
    if let Some(picker) = tui.category_picker.as_mut() {
        if let Some(picker_event) = picker.handle_event(&event) {
            tui.category_picker = None;
            if let PickerEvent::Select(category) = picker_event {
                return dispatch(app, tui, Action::SelectCategory(category));
            }
        }
        return false;
    }

    match event {
        TuiEvent::OpenCategories => {
            tui.open_category_picker(app);
            false
        }
        TuiEvent::Escape => dispatch(app, tui, Action::Quit),
        // Enter during feedback skips the rest of the wait.
        TuiEvent::Submit if app.feedback.is_some() => dispatch(app, tui, Action::Advance),
        TuiEvent::Hint => {
            let input = tui.answer_box.buffer.clone();
            dispatch(app, tui, Action::RequestHint(input))
        }
        TuiEvent::Pass => dispatch(app, tui, Action::Pass),
        other => match tui.answer_box.handle_event(&other) {
            Some(AnswerEvent::Submit(text)) => dispatch(app, tui, Action::Submit(text)),
            Some(AnswerEvent::ContentChanged) | None => false,
        },
    }
}

pub fn run(config: &ResolvedConfig, deck: Deck) -> std::io::Result<()> {
    let mut app = App::from_config(deck, config);
    let mut tui = TuiState::new();

    match config.category.clone() {
        Some(category) => {
            dispatch(&mut app, &mut tui, Action::SelectCategory(Some(category)));
        }
        None => tui.open_category_picker(&app),
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        tui.answer_box.enabled = app.controls_enabled();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(tui.poll_timeout(Instant::now()));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
            tui.answer_box.enabled = app.controls_enabled();
        }

        if should_quit {
            break;
        }

        if let Some(deadline) = tui.advance_at
            && Instant::now() >= deadline
        {
            debug!("Feedback delay elapsed");
            dispatch(&mut app, &mut tui, Action::Advance);
            needs_redraw = true;
        }
    }

    let stats = app.quiz.statistics();
    info!(
        "Exiting: score={} correct={} wrong={}",
        stats.score, stats.correct, stats.wrong
    );

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) {
        for event in events {
            assert!(!handle_event(app, tui, event.clone()));
            tui.answer_box.enabled = app.controls_enabled();
        }
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        let events: Vec<TuiEvent> = text.chars().map(TuiEvent::InputChar).collect();
        press(app, tui, &events);
    }

    #[test]
    fn test_picker_selects_category() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.open_category_picker(&app);

        press(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert!(tui.category_picker.is_none());
        assert_eq!(app.quiz.category(), Some("Capitals"));
    }

    #[test]
    fn test_typed_answer_schedules_advance() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, Action::SelectCategory(Some("Science".into())));
        tui.answer_box.enabled = app.controls_enabled();

        type_text(&mut app, &mut tui, "water");
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(tui.advance_at.is_some());
        assert_eq!(app.quiz.statistics().score, 10);

        // Input is locked while feedback shows.
        type_text(&mut app, &mut tui, "zz");
        assert_eq!(tui.answer_box.buffer, "water");

        // Enter skips the wait.
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(tui.advance_at.is_none());
        assert!(tui.answer_box.buffer.is_empty());
        assert!(app.quiz.is_game_over());
    }

    #[test]
    fn test_hint_key_fills_answer_box() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, Action::SelectCategory(Some("Science".into())));
        tui.answer_box.enabled = app.controls_enabled();

        press(&mut app, &mut tui, &[TuiEvent::Hint]);
        assert_eq!(tui.answer_box.buffer.chars().count(), 5);
        assert_eq!(app.quiz.hints_used(), 1);
    }

    #[test]
    fn test_category_switch_cancels_timer() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, Action::SelectCategory(Some("Science".into())));
        dispatch(&mut app, &mut tui, Action::Submit("lava".into()));
        assert!(tui.advance_at.is_some());

        dispatch(&mut app, &mut tui, Action::SelectCategory(Some("Capitals".into())));
        assert!(tui.advance_at.is_none());
        assert!(app.feedback.is_none());
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Escape));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
    }

    #[test]
    fn test_escape_in_picker_only_dismisses() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.open_category_picker(&app);
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Escape));
        assert!(tui.category_picker.is_none());
    }

    #[test]
    fn test_poll_timeout_tracks_deadline() {
        let mut tui = TuiState::new();
        let now = Instant::now();
        assert_eq!(tui.poll_timeout(now), IDLE_POLL);

        tui.advance_at = Some(now + Duration::from_millis(120));
        assert_eq!(tui.poll_timeout(now), Duration::from_millis(120));

        tui.advance_at = Some(now);
        assert_eq!(tui.poll_timeout(now + Duration::from_millis(5)), Duration::ZERO);
    }
}
