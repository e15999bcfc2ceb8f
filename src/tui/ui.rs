use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, HINT_RULE};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryPicker, QuestionCard, StatsBar, TitleBar, Tone};

const KEY_HELP: &str = "Enter Submit  Tab Hint  Ctrl+P Pass  Ctrl+O Categories  Esc Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(5), Length(1), Length(3), Length(1), Length(1)]);
    let [title_area, question_area, rule_area, answer_area, stats_area, help_area] =
        layout.areas(frame.area());

    let stats = app.quiz.statistics();

    TitleBar::new(
        stats.score,
        app.quiz.category().map(str::to_string),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    QuestionCard::new(
        app.question_text(),
        Tone::from_feedback(app.feedback.as_ref()),
    )
    .render(frame, question_area);

    frame.render_widget(
        Paragraph::new(HINT_RULE)
            .style(Style::default().fg(Color::Gray))
            .centered(),
        rule_area,
    );

    tui.answer_box.render(frame, answer_area);

    StatsBar::new(stats).render(frame, stats_area);

    frame.render_widget(
        Line::styled(
            KEY_HELP,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
        .centered(),
        help_area,
    );

    if let Some(picker) = tui.category_picker.as_mut() {
        CategoryPicker::new(picker).render(frame, frame.area());
    }
}
