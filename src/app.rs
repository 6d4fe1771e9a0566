use crate::models::AppState;
use crate::session::{AnswerOutcome, QuizSession};

pub struct App {
    pub state: AppState,
    session: QuizSession,
    selected_option: usize,
    last_outcome: Option<AnswerOutcome>,
    result_scroll: usize,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            selected_option: 0,
            last_outcome: None,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Outcome of the current question, once it has been answered.
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_option(&mut self) {
        let count = self.session.current_options().len();
        if count > 0 && !self.session.answered() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.session.current_options().len();
        if count > 0 && !self.session.answered() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        self.state = if self.session.is_finished() {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    pub fn submit_answer(&mut self) {
        if let Some(outcome) = self.session.answer(self.selected_option) {
            self.last_outcome = Some(outcome);
        }
    }

    pub fn next_question(&mut self) {
        if !self.session.advance() {
            return;
        }
        self.selected_option = 0;
        self.last_outcome = None;

        if self.session.is_finished() {
            self.state = AppState::Result;
        }
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.session.records().len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.state = AppState::Quiz;
        self.selected_option = 0;
        self.last_outcome = None;
        self.result_scroll = 0;
        if self.session.is_finished() {
            self.state = AppState::Result;
        }
    }
}
