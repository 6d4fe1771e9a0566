mod answer;
mod option;
mod question;
mod state;

pub use answer::{AnswerEntry, AnswerPool};
pub use option::AnswerOption;
pub use question::Question;
pub use state::AppState;
