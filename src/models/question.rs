use serde::{Deserialize, Deserializer, Serialize};

/// A single quiz question as stored in `questions.json`.
///
/// Only the name of the correct answer is stored; the other choices are
/// drawn from the answer pool categories listed in `pool_tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "ques", alias = "prompt")]
    pub prompt: String,
    #[serde(rename = "answ", alias = "answer")]
    pub correct_answer: String,
    #[serde(rename = "pool", default, deserialize_with = "null_as_empty")]
    pub pool_tags: Vec<String>,
}

impl Question {
    pub fn new<I, S>(prompt: impl Into<String>, correct_answer: impl Into<String>, pool_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            pool_tags: pool_tags.into_iter().map(Into::into).collect(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
