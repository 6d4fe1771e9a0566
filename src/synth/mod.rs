//! Multiple-choice option synthesis.
//!
//! Given a question and the answer pool, builds the list of choices shown to
//! the player: the correct answer plus distractors drawn from the question's
//! categories, falling back to the whole pool when those are too small.

mod options;
mod shuffle;

pub use options::{DEFAULT_OPTIONS_COUNT, OptionSynthesizer};
pub use shuffle::shuffle;
