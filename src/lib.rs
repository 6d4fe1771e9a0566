//! # pool-quiz
//!
//! A terminal multiple-choice quiz. Questions only name their correct answer;
//! the other choices are drawn from a categorized answer pool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pool_quiz::{OptionSynthesizer, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", "answers.json", OptionSynthesizer::default())?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod session;
pub mod synth;
pub mod terminal;
mod ui;

use std::io::{self, Write};
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use serde::Serialize;

pub use app::App;
pub use data::{
    LoadError, load_answer_pool_from_json, load_questions_from_json, parse_answer_pool,
    parse_questions,
};
pub use models::{AnswerEntry, AnswerOption, AnswerPool, AppState, Question};
pub use session::{AnswerOutcome, QuestionRecord, QuizSession};
pub use synth::{DEFAULT_OPTIONS_COUNT, OptionSynthesizer};

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Failed to load quiz data: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode options: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Options synthesized for one question, as written by [`Quiz::dump`].
#[derive(Serialize)]
struct DumpedQuestion<'a> {
    prompt: &'a str,
    options: &'a [AnswerOption],
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, pool: AnswerPool, synthesizer: OptionSynthesizer) -> Self {
        Self {
            app: App::new(QuizSession::new(questions, pool, synthesizer)),
        }
    }

    /// Load a quiz from a question file and an answer pool file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pool_quiz::{OptionSynthesizer, Quiz};
    ///
    /// let quiz = Quiz::from_json("questions.json", "answers.json", OptionSynthesizer::new(5))
    ///     .expect("Failed to load quiz");
    /// ```
    pub fn from_json<Q: AsRef<Path>, A: AsRef<Path>>(
        questions_path: Q,
        answers_path: A,
        synthesizer: OptionSynthesizer,
    ) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(questions_path)?;
        let pool = load_answer_pool_from_json(answers_path)?;
        Ok(Self::new(questions, pool, synthesizer))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::init()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    /// Writes every question with a freshly synthesized option set as JSON
    /// lines, in session order, without starting the terminal UI.
    pub fn dump<W: Write>(mut self, mut out: W) -> Result<(), QuizError> {
        let session = self.app.session_mut();
        while let Some(question) = session.current_question() {
            let line = DumpedQuestion {
                prompt: &question.prompt,
                options: session.current_options(),
            };
            serde_json::to_writer(&mut out, &line)?;
            writeln!(out)?;

            let correct = session
                .current_options()
                .iter()
                .position(|option| option.is_correct)
                .unwrap_or_default();
            session.answer(correct);
            session.advance();
        }
        out.flush()?;
        Ok(())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    let answered = app.session().answered();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') if answered => {
            app.next_question();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.next_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
