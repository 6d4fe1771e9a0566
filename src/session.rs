//! Quiz session state.
//!
//! A [`QuizSession`] owns everything one run through the questions needs:
//! the shuffled question order, the answer pool, the current option list and
//! the running score. Nothing here touches the terminal.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::models::{AnswerOption, AnswerPool, Question};
use crate::synth::{OptionSynthesizer, shuffle};

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Description of the correct answer, empty if the pool has none.
    pub explanation: String,
}

/// What the player picked for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    pub correct_answer: String,
    pub chosen: String,
    pub correct: bool,
}

pub struct QuizSession {
    questions: Vec<Question>,
    pool: AnswerPool,
    synthesizer: OptionSynthesizer,
    rng: StdRng,
    current_index: usize,
    options: Vec<AnswerOption>,
    answered: bool,
    score: usize,
    records: Vec<QuestionRecord>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, pool: AnswerPool, synthesizer: OptionSynthesizer) -> Self {
        Self::with_rng(questions, pool, synthesizer, StdRng::from_entropy())
    }

    /// Creates a session driven by the given RNG, so question order and
    /// options are reproducible.
    pub fn with_rng(
        questions: Vec<Question>,
        pool: AnswerPool,
        synthesizer: OptionSynthesizer,
        rng: StdRng,
    ) -> Self {
        let mut session = Self {
            questions,
            pool,
            synthesizer,
            rng,
            current_index: 0,
            options: Vec::new(),
            answered: false,
            score: 0,
            records: Vec::new(),
        };
        session.begin();
        session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// 1-based number of the current question.
    pub fn current_number(&self) -> usize {
        (self.current_index + 1).min(self.total())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Whether the current question has already been answered.
    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn pool(&self) -> &AnswerPool {
        &self.pool
    }

    /// Answers the current question with the option at `index`.
    ///
    /// Only the first answer per question counts; later calls, out-of-range
    /// indices and calls after the last question return `None`.
    pub fn answer(&mut self, index: usize) -> Option<AnswerOutcome> {
        if self.answered {
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        let chosen = self.options.get(index)?;

        let correct = chosen.is_correct;
        if correct {
            self.score += 1;
        }
        let explanation = self
            .options
            .iter()
            .find(|option| option.is_correct)
            .map(|option| option.description.clone())
            .unwrap_or_default();

        self.records.push(QuestionRecord {
            prompt: question.prompt.clone(),
            correct_answer: question.correct_answer.clone(),
            chosen: chosen.text.clone(),
            correct,
        });
        self.answered = true;
        debug!(
            question = self.current_index,
            correct,
            score = self.score,
            "answer submitted"
        );

        Some(AnswerOutcome {
            correct,
            explanation,
        })
    }

    /// Moves on to the next question once the current one is answered.
    ///
    /// Returns `false` when nothing changed.
    pub fn advance(&mut self) -> bool {
        if !self.answered || self.is_finished() {
            return false;
        }
        self.current_index += 1;
        self.answered = false;
        self.prepare_options();

        if self.is_finished() {
            info!(score = self.score, total = self.total(), "quiz finished");
        }
        true
    }

    /// Starts over with a fresh question order and a zero score.
    pub fn restart(&mut self) {
        info!("restarting quiz");
        self.begin();
    }

    fn begin(&mut self) {
        shuffle(&mut self.questions, &mut self.rng);
        self.current_index = 0;
        self.answered = false;
        self.score = 0;
        self.records.clear();
        self.prepare_options();
    }

    fn prepare_options(&mut self) {
        self.options = match self.questions.get(self.current_index) {
            Some(question) => self
                .synthesizer
                .synthesize_with(question, &self.pool, &mut self.rng),
            None => Vec::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerEntry;

    fn sample_session(seed: u64) -> QuizSession {
        let pool = AnswerPool::from_iter([
            (
                "fruit".to_string(),
                vec![
                    AnswerEntry::new("Apple", "A fruit"),
                    AnswerEntry::new("Pear", "Another fruit"),
                    AnswerEntry::new("Plum", ""),
                ],
            ),
            (
                "veg".to_string(),
                vec![
                    AnswerEntry::new("Carrot", "A root"),
                    AnswerEntry::new("Leek", "A stalk"),
                ],
            ),
        ]);
        let questions = vec![
            Question::new("Red and crunchy?", "Apple", ["fruit"]),
            Question::new("Orange root?", "Carrot", ["veg"]),
            Question::new("Unknown?", "Durian", Vec::<String>::new()),
        ];
        QuizSession::with_rng(
            questions,
            pool,
            OptionSynthesizer::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    fn correct_index(session: &QuizSession) -> usize {
        session
            .current_options()
            .iter()
            .position(|option| option.is_correct)
            .unwrap()
    }

    fn wrong_index(session: &QuizSession) -> usize {
        session
            .current_options()
            .iter()
            .position(|option| !option.is_correct)
            .unwrap()
    }

    #[test]
    fn test_new_session_has_options() {
        let session = sample_session(1);
        assert_eq!(session.total(), 3);
        assert_eq!(session.current_number(), 1);
        assert!(!session.is_finished());
        assert!(!session.answered());
        assert_eq!(session.current_options().len(), 4);
        let question = session.current_question().unwrap();
        assert!(
            session
                .current_options()
                .iter()
                .any(|o| o.is_correct && o.text == question.correct_answer)
        );
    }

    #[test]
    fn test_full_run_scores_correct_answers() {
        let mut session = sample_session(2);

        let first = session.answer(correct_index(&session)).unwrap();
        assert!(first.correct);
        assert!(session.advance());

        let second = session.answer(wrong_index(&session)).unwrap();
        assert!(!second.correct);
        assert!(session.advance());

        let third = session.answer(correct_index(&session)).unwrap();
        assert!(third.correct);
        assert!(session.advance());

        assert!(session.is_finished());
        assert_eq!(session.score(), 2);
        assert_eq!(session.records().len(), 3);
        assert!(session.current_question().is_none());
        assert!(session.current_options().is_empty());
        assert!(!session.advance());
    }

    #[test]
    fn test_answer_counts_once() {
        let mut session = sample_session(3);
        let index = correct_index(&session);

        assert!(session.answer(index).is_some());
        assert!(session.answer(index).is_none());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut session = sample_session(4);
        assert!(!session.advance());
        assert_eq!(session.current_number(), 1);
    }

    #[test]
    fn test_out_of_range_answer_is_ignored() {
        let mut session = sample_session(5);
        assert!(session.answer(99).is_none());
        assert!(!session.answered());
    }

    #[test]
    fn test_explanation_is_correct_description() {
        let mut session = sample_session(6);
        let question = session.current_question().unwrap().clone();
        let expected = session.pool().describe(&question.correct_answer).to_string();

        let outcome = session.answer(wrong_index(&session)).unwrap();
        assert_eq!(outcome.explanation, expected);
        assert_eq!(session.records()[0].correct_answer, question.correct_answer);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut session = sample_session(7);
        while !session.is_finished() {
            session.answer(correct_index(&session));
            session.advance();
        }
        assert_eq!(session.score(), 3);

        session.restart();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_number(), 1);
        assert!(session.records().is_empty());
        assert!(!session.current_options().is_empty());
    }

    #[test]
    fn test_empty_session_is_finished() {
        let session = QuizSession::new(Vec::new(), AnswerPool::default(), OptionSynthesizer::default());
        assert!(session.is_finished());
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), 0);
    }
}
