use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::models::{AnswerEntry, AnswerOption, AnswerPool, Question};

use super::shuffle;

/// Number of choices shown per question unless configured otherwise.
pub const DEFAULT_OPTIONS_COUNT: usize = 4;

/// Builds the option list for a question.
///
/// Synthesis never fails: missing categories, an empty tag list or an answer
/// that is absent from the pool all lead to fewer distractors, down to a
/// single option holding the correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSynthesizer {
    options_count: usize,
}

impl OptionSynthesizer {
    /// Creates a synthesizer producing up to `options_count` options.
    ///
    /// A count of zero is raised to one, since the correct answer is always shown.
    pub fn new(options_count: usize) -> Self {
        Self {
            options_count: options_count.max(1),
        }
    }

    pub fn options_count(&self) -> usize {
        self.options_count
    }

    /// Synthesizes options using the thread-local RNG.
    pub fn synthesize(&self, question: &Question, pool: &AnswerPool) -> Vec<AnswerOption> {
        self.synthesize_with(question, pool, &mut rand::thread_rng())
    }

    /// Synthesizes options with the given RNG.
    ///
    /// Distractors come from the question's tagged categories, deduplicated by
    /// name (first occurrence wins) and never equal to the correct answer. If
    /// fewer than `options_count - 1` remain, every other category is scanned
    /// and *all* unseen names are added before the random pick, so any entry
    /// in the pool can end up as a distractor.
    pub fn synthesize_with<R: Rng + ?Sized>(
        &self,
        question: &Question,
        pool: &AnswerPool,
        rng: &mut R,
    ) -> Vec<AnswerOption> {
        let correct = question.correct_answer.as_str();
        let wanted = self.options_count - 1;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut candidates: Vec<&AnswerEntry> = Vec::new();

        for tag in &question.pool_tags {
            for entry in pool.entries_in(tag) {
                if seen.insert(entry.name.as_str()) {
                    candidates.push(entry);
                }
            }
        }
        candidates.retain(|entry| entry.name != correct);
        let tagged = candidates.len();

        if candidates.len() < wanted {
            debug!(
                answer = correct,
                found = candidates.len(),
                wanted,
                "tagged categories too small, scanning whole pool"
            );
            for category in pool.categories() {
                for entry in pool.entries_in(category) {
                    if entry.name != correct && seen.insert(entry.name.as_str()) {
                        candidates.push(entry);
                    }
                }
            }
        }

        debug!(
            answer = correct,
            tagged,
            total = candidates.len(),
            "gathered distractor candidates"
        );

        shuffle(&mut candidates, rng);
        candidates.truncate(wanted);

        let mut options: Vec<AnswerOption> = candidates
            .into_iter()
            .map(|entry| AnswerOption::wrong(&entry.name, &entry.description))
            .collect();
        options.push(AnswerOption::correct(correct, pool.describe(correct)));

        shuffle(&mut options, rng);
        options
    }
}

impl Default for OptionSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS_COUNT)
    }
}
