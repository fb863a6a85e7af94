//! # Domain Model
//!
//! The two stored entities, [`Question`] and [`Category`], plus the loosely typed
//! drafts that clients submit.
//!
//! ## Wire Shapes
//!
//! ```text
//! Question  {"id": 5, "question": "...", "answer": "...", "category": 4, "difficulty": 2}
//! Category  {"id": 4, "type": "History"}
//! ```
//!
//! ## Lenient Numbers
//!
//! Browser forms tend to send numbers as strings (`"category": "4"`). Fields that
//! carry identifiers or difficulty accept either a JSON number or a numeric
//! string. A blank string counts as absent. Anything else is rejected during
//! deserialization.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriviaError};

/// Category selector meaning "every category" in quiz requests.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl NewQuestion {
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Raw create input. Every field is optional so that validation can name the
/// first one missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub category: Option<i64>,
}

impl QuestionDraft {
    pub fn new(question: &str, answer: &str, difficulty: i64, category: i64) -> Self {
        Self {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            difficulty: Some(difficulty),
            category: Some(category),
        }
    }

    /// Checks that all four fields are present and the texts are not blank.
    pub fn validate(self) -> Result<NewQuestion> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let difficulty = self
            .difficulty
            .ok_or(TriviaError::MissingField("difficulty"))?;
        let category = self.category.ok_or(TriviaError::MissingField("category"))?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(TriviaError::MissingField(field)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn new(previous_questions: Vec<i64>, category: i64) -> Self {
        Self {
            previous_questions: Some(previous_questions),
            quiz_category: Some(QuizCategory {
                id: Some(category),
                label: None,
            }),
        }
    }

    /// The requested category id, `ALL_CATEGORIES` for the "all" selector.
    pub fn category_id(&self) -> Result<i64> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .ok_or_else(|| TriviaError::InvalidRequest("quiz_category.id is required".into()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Accepts `5`, `"5"`, `null` and `""` (the last two as absent).
pub fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected an integer, got {:?}", text)))
        }
    }
}
