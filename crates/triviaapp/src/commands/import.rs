//! Bulk load of categories and questions from a JSON document:
//!
//! ```json
//! {
//!   "categories": [{"id": 1, "type": "Science"}],
//!   "questions": [{"question": "...", "answer": "...", "difficulty": 3, "category": 1}]
//! }
//! ```
//!
//! Questions may reference categories declared in the same document. The whole
//! document is validated before any row is written, so one bad question or
//! category rejects the batch and leaves the store untouched. Categories
//! declared without an id get one from the store and cannot be referenced
//! under strict category checking.

use crate::commands::ImportReport;
use crate::error::{Result, TriviaError};
use crate::model::{NewQuestion, QuestionDraft};
use crate::store::DataStore;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportDocument {
    #[serde(default)]
    pub categories: Vec<ImportCategory>,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportCategory {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub label: String,
}

pub fn run_file<S: DataStore>(
    store: &mut S,
    path: &Path,
    strict_categories: bool,
) -> Result<ImportReport> {
    let raw = fs::read_to_string(path)?;
    let document: ImportDocument = serde_json::from_str(&raw)?;
    run(store, document, strict_categories)
}

pub fn run<S: DataStore>(
    store: &mut S,
    document: ImportDocument,
    strict_categories: bool,
) -> Result<ImportReport> {
    let mut known: HashSet<i64> = store.list_categories()?.iter().map(|c| c.id).collect();

    let mut new_categories = Vec::new();
    for category in document.categories {
        if category.label.trim().is_empty() {
            return Err(TriviaError::InvalidRequest(
                "category type must not be empty".into(),
            ));
        }
        match category.id {
            // Already stored, or declared earlier in this document.
            Some(id) if !known.insert(id) => {}
            _ => new_categories.push(category),
        }
    }

    let validated = document
        .questions
        .into_iter()
        .map(|draft| {
            let question = draft.validate()?;
            if strict_categories && !known.contains(&question.category) {
                return Err(TriviaError::UnknownCategory(question.category));
            }
            Ok(question)
        })
        .collect::<Result<Vec<NewQuestion>>>()?;

    let mut report = ImportReport::default();
    for category in new_categories {
        store.insert_category(category.id, &category.label)?;
        report.categories += 1;
    }
    for question in validated {
        store.insert_question(question)?;
        report.questions += 1;
    }

    info!(
        categories = report.categories,
        questions = report.questions,
        "import finished"
    );
    Ok(report)
}
