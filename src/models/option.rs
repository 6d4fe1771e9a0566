use serde::Serialize;

/// One choice shown for a question. Rebuilt for every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
    pub description: String,
}

impl AnswerOption {
    pub fn correct(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_correct: true,
            description: description.into(),
        }
    }

    pub fn wrong(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_correct: false,
            description: description.into(),
        }
    }
}
