//! # Command Layer
//!
//! This module contains the **core business logic** of the question bank. Each
//! operation lives in its own submodule as plain functions generic over
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Implement listing, search, category filtering, create, delete and quiz selection
//! - Decide which failures are errors (an empty listing page is, an empty search is not)
//! - Return serializable result structs whose field names are the wire names
//!
//! ## What Commands Do NOT Do
//!
//! - **Transport**: no status codes, headers or JSON envelopes beyond [`Success`]
//! - **Input parsing**: page numbers and drafts arrive already typed
//! - **Ambient randomness**: quiz selection takes its RNG as an argument
//!
//! ## Structured Returns
//!
//! Listing-style results all carry `questions`, `total_questions` and
//! `current_category`. `total_questions` counts the whole filtered result set,
//! not the page. `current_category` is the category of each question on the
//! page, in page order, duplicates kept.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` fixtures and cover every branch and error condition.
//!
//! ## Command Modules
//!
//! - [`categories`]: All category labels
//! - [`list`]: Paginated listing of every question
//! - [`search`]: Case-insensitive substring search
//! - [`by_category`]: Questions of one category
//! - [`get`]: One question by id
//! - [`create`]: Validate and store a new question
//! - [`delete`]: Remove a question
//! - [`quiz`]: Random unseen question selection
//! - [`import`]: Bulk load of categories and questions
//! - [`helpers`]: Shared page assembly

use crate::model::Question;
use serde::Serialize;

pub mod by_category;
pub mod categories;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod import;
pub mod list;
pub mod quiz;
pub mod search;

/// Marks a result as successful on the wire: `{"success": true, ...fields}`.
#[derive(Debug, Clone, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// A page of the full question listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQuestions {
    pub categories: Vec<String>,
    /// Label of the requested category.
    pub current_category: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDetail {
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Created {
    pub created: i64,
    #[serde(flatten)]
    pub page: QuestionPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub deleted: i64,
    /// The question as it was just before deletion.
    pub question: Question,
    #[serde(flatten)]
    pub page: QuestionPage,
}

/// Outcome of a quiz draw. `question` is `None` once every candidate has been
/// served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub question: Option<Question>,
}

impl QuizResult {
    pub fn is_exhausted(&self) -> bool {
        self.question.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub categories: usize,
    pub questions: usize,
}
