//! # Actions
//!
//! Everything that can happen in quizdeck becomes an `Action`.
//! Player presses Enter? That's `Action::Submit(text)`.
//! Feedback timer fires? That's `Action::Advance`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect`: the work the adapter has to do that the core can't (touch the
//! input box, start the feedback timer, quit). No timers or I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::quiz::Outcome;
use crate::core::state::{App, Feedback};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `None` is the "Select Category" placeholder.
    SelectCategory(Option<String>),
    /// Carries the current answer-box text so typed letters survive the reveal.
    RequestHint(String),
    Submit(String),
    Pass,
    /// Feedback delay elapsed (or was skipped); show the next card.
    Advance,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Put this text into the answer box.
    ReplaceInput(String),
    ClearInput,
    /// Dispatch `Action::Advance` after `App::feedback_delay`.
    ScheduleAdvance,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectCategory(category) => {
            match app.quiz.select_category(category.as_deref()) {
                Ok(()) => {
                    app.feedback = None;
                    app.status_message = match app.quiz.category() {
                        Some(name) => format!("Category: {name}"),
                        None => String::new(),
                    };
                    Effect::ClearInput
                }
                Err(e) => {
                    warn!("Category selection failed: {}", e);
                    app.status_message = e.to_string();
                    Effect::None
                }
            }
        }
        Action::RequestHint(input) => {
            if app.feedback.is_some() {
                return Effect::None;
            }
            match app.quiz.request_hint(&input) {
                Some(text) => {
                    let used = app.quiz.hints_used();
                    app.status_message = if used > 1 {
                        format!("Hints used: {used} (no points for this card)")
                    } else {
                        format!("Hints used: {used}")
                    };
                    Effect::ReplaceInput(text)
                }
                None => Effect::None,
            }
        }
        Action::Submit(text) => {
            if app.feedback.is_some() {
                return Effect::None;
            }
            let Some(outcome) = app.quiz.submit_answer(&text) else {
                return Effect::None;
            };
            let feedback = match outcome {
                Outcome::Correct { awarded } => {
                    app.status_message = format!("Correct! +{awarded}");
                    Feedback::Correct { awarded }
                }
                Outcome::Wrong {
                    correct_answer,
                    deferred,
                } => {
                    app.status_message = if deferred {
                        "Wrong. Card moved to the next pass".to_string()
                    } else {
                        "Wrong".to_string()
                    };
                    Feedback::Wrong { correct_answer }
                }
            };
            app.feedback = Some(feedback);
            Effect::ScheduleAdvance
        }
        Action::Pass => {
            if app.feedback.is_some() || !app.quiz.pass_card() {
                return Effect::None;
            }
            app.status_message = "Card passed".to_string();
            Effect::ClearInput
        }
        Action::Advance => {
            // Stale timers (e.g. from before a category switch) find no feedback.
            if app.feedback.take().is_none() {
                return Effect::None;
            }
            app.quiz.advance(false);
            if app.quiz.is_game_over() {
                app.status_message = "Game Over!".to_string();
            }
            Effect::ClearInput
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn current_answer(app: &App) -> String {
        app.quiz.current_card().unwrap().answer.clone()
    }

    #[test]
    fn test_select_category_clears_input() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectCategory(Some("Capitals".into())));
        assert_eq!(effect, Effect::ClearInput);
        assert_eq!(app.status_message, "Category: Capitals");
        assert!(app.controls_enabled());
    }

    #[test]
    fn test_select_placeholder_resets() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Capitals".into())));
        let effect = update(&mut app, Action::SelectCategory(None));
        assert_eq!(effect, Effect::ClearInput);
        assert!(app.quiz.category().is_none());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_unknown_category_reports_status() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectCategory(Some("Nope".into())));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status_message, "unknown category: Nope");
    }

    #[test]
    fn test_hint_replaces_input() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Science".into())));
        let effect = update(&mut app, Action::RequestHint(String::new()));
        match effect {
            Effect::ReplaceInput(text) => {
                assert_eq!(text.chars().count(), 5);
                assert_eq!(text.chars().filter(|c| *c == '*').count(), 4);
            }
            other => panic!("Expected ReplaceInput, got {:?}", other),
        }
        assert_eq!(app.status_message, "Hints used: 1");
    }

    #[test]
    fn test_hint_without_category_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::RequestHint(String::new())), Effect::None);
    }

    #[test]
    fn test_submit_schedules_advance_and_locks_controls() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Capitals".into())));
        let answer = current_answer(&app);

        let effect = update(&mut app, Action::Submit(answer));
        assert_eq!(effect, Effect::ScheduleAdvance);
        assert_eq!(app.feedback, Some(Feedback::Correct { awarded: 10 }));
        assert!(!app.controls_enabled());

        // Controls are ignored until the advance lands.
        assert_eq!(update(&mut app, Action::Pass), Effect::None);
        assert_eq!(update(&mut app, Action::Submit("x".into())), Effect::None);
        assert_eq!(update(&mut app, Action::RequestHint(String::new())), Effect::None);
        assert_eq!(app.quiz.statistics().correct, 1);

        assert_eq!(update(&mut app, Action::Advance), Effect::ClearInput);
        assert!(app.feedback.is_none());
        assert!(app.controls_enabled());
    }

    #[test]
    fn test_wrong_answer_shows_correct_one() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Science".into())));
        update(&mut app, Action::Submit("Fire".into()));
        assert_eq!(
            app.feedback,
            Some(Feedback::Wrong {
                correct_answer: "Water".to_string()
            })
        );
        assert_eq!(app.question_text(), "Correct Answer: Water");
    }

    #[test]
    fn test_stale_advance_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Capitals".into())));
        let before = app.quiz.current_index();
        assert_eq!(update(&mut app, Action::Advance), Effect::None);
        assert_eq!(app.quiz.current_index(), before);
    }

    #[test]
    fn test_pass_clears_input() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Capitals".into())));
        assert_eq!(update(&mut app, Action::Pass), Effect::ClearInput);
        assert_eq!(app.quiz.retry().len(), 1);
    }

    #[test]
    fn test_last_card_reaches_game_over() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Some("Science".into())));
        update(&mut app, Action::Submit("water".into()));
        update(&mut app, Action::Advance);
        assert!(app.quiz.is_game_over());
        assert_eq!(app.status_message, "Game Over!");
        assert_eq!(app.question_text(), "Game Over!");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
