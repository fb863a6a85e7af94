//! # Storage Layer
//!
//! This module defines the storage abstraction for the question bank. The
//! [`DataStore`] trait lets the command layer run unchanged against different
//! backends.
//!
//! ## Contract
//!
//! - Question listings come back ordered by id ascending. Search and category
//!   filters keep that order.
//! - Ids are assigned by the store on insert and never reused, even after a
//!   delete.
//! - Lookups of missing rows return typed not-found errors
//!   ([`TriviaError::QuestionNotFound`](crate::error::TriviaError::QuestionNotFound),
//!   [`TriviaError::CategoryNotFound`](crate::error::TriviaError::CategoryNotFound)).
//! - Search is a case-insensitive substring match on the question text. `%` and
//!   `_` in the term match literally.
//! - The store does not check that a question's category exists. That check
//!   lives in the create command.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production implementation on a SQLite file.
//! - [`memory::InMemoryStore`]: For testing logic without a database.
//!
//! ## Schema
//!
//! ```text
//! categories(id INTEGER PRIMARY KEY, type TEXT NOT NULL)
//! questions(id INTEGER PRIMARY KEY AUTOINCREMENT,
//!           question TEXT, answer TEXT, difficulty INTEGER, category INTEGER)
//! ```

use crate::error::Result;
use crate::model::{Category, NewQuestion, Question};

pub mod memory;
pub mod sqlite;

/// Labels seeded by `init`, in id order starting at 1.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Abstract interface for question and category storage.
pub trait DataStore {
    /// All categories, ordered by id
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Get a category by id
    fn get_category(&self, id: i64) -> Result<Category>;

    /// Add a category. `None` lets the store pick the id.
    fn insert_category(&mut self, id: Option<i64>, label: &str) -> Result<Category>;

    /// All questions, ordered by id
    fn list_questions(&self) -> Result<Vec<Question>>;

    /// Questions whose category equals `category`
    fn questions_in_category(&self, category: i64) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Get a question by id
    fn get_question(&self, id: i64) -> Result<Question>;

    /// Store a new question and return it with its assigned id
    fn insert_question(&mut self, question: NewQuestion) -> Result<Question>;

    /// Delete a question permanently
    fn delete_question(&mut self, id: i64) -> Result<()>;

    fn count_questions(&self) -> Result<usize> {
        Ok(self.list_questions()?.len())
    }

    /// Insert [`DEFAULT_CATEGORIES`] when the store has no categories yet.
    /// Returns how many were added.
    fn seed_default_categories(&mut self) -> Result<usize> {
        if !self.list_categories()?.is_empty() {
            return Ok(0);
        }
        for (i, label) in DEFAULT_CATEGORIES.iter().enumerate() {
            self.insert_category(Some(i as i64 + 1), label)?;
        }
        Ok(DEFAULT_CATEGORIES.len())
    }
}
