use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AnswerOption;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.prompt);
    render_options(
        frame,
        chunks[2],
        session.current_options(),
        app.selected_option(),
        session.answered(),
    );
    if let Some(outcome) = app.last_outcome() {
        render_explanation(frame, chunks[3], outcome.correct, &outcome.explanation);
    }
    render_controls(frame, chunks[4], session.answered());
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let progress = format!(
        "score {}  ·  {}/{}",
        session.score(),
        session.current_number(),
        session.total()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

/// A, B, ... Z, then 27, 28, ... once the letters run out.
fn option_label(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map(|letter| char::from(letter).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

fn option_style(option: &AnswerOption, is_selected: bool, answered: bool) -> Style {
    match (answered, option.is_correct, is_selected) {
        (false, _, true) => Style::default().fg(Color::Cyan).bold(),
        (false, _, false) => Style::default().fg(Color::Gray),
        (true, true, _) => Style::default().fg(Color::Green).bold(),
        (true, false, true) => Style::default().fg(Color::Red).bold(),
        (true, false, false) => Style::default().fg(Color::DarkGray),
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[AnswerOption],
    selected: usize,
    answered: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = option_style(option, is_selected, answered);
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, correct: bool, explanation: &str) {
    let (verdict, color) = if correct {
        ("Correct!", Color::Green)
    } else {
        ("Wrong.", Color::Red)
    };

    let mut lines = vec![Line::from(Span::styled(
        verdict,
        Style::default().fg(color).bold(),
    ))];
    if !explanation.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Explanation: ", Style::default().fg(Color::White).bold()),
            Span::styled(explanation, Style::default().fg(Color::Gray)),
        ]));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let hint = if answered {
        "enter/n next  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
