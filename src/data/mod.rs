mod loader;

pub use loader::{
    LoadError, load_answer_pool_from_json, load_questions_from_json, parse_answer_pool,
    parse_questions,
};
