//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for question bank operations, whichever client is calling.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store, the paginator, the quiz random source and the
//!   category strictness flag, so clients do not thread them through
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: raw `page` query values become page numbers
//!   (absent or non-integer means page 1)
//! - **Returns structured types**, never strings
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Transport**: No status codes or headers; see [`crate::error::ErrorKind`]
//!
//! ## Generic Over DataStore
//!
//! `TriviaApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TriviaApi<SqliteStore>`
//! - Testing: `TriviaApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and argument normalization. Command behavior is
//! tested in the command modules.

use crate::commands::{
    self, import::ImportDocument, CategoryList, CategoryQuestions, Created, Deleted,
    ImportReport, QuestionDetail, QuestionPage, QuizResult, SearchResult,
};
use crate::config::TriviaConfig;
use crate::error::Result;
use crate::model::{QuestionDraft, QuizRequest};
use crate::pagination::{parse_page, Paginator};
use crate::store::DataStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// The main API facade for trivia operations.
pub struct TriviaApi<S: DataStore> {
    store: S,
    paginator: Paginator,
    rng: StdRng,
    strict_categories: bool,
}

impl<S: DataStore> TriviaApi<S> {
    /// Default page size, strict categories and an entropy-seeded RNG.
    pub fn new(store: S) -> Self {
        Self {
            store,
            paginator: Paginator::default(),
            rng: StdRng::from_entropy(),
            strict_categories: true,
        }
    }

    /// Quiz draws repeat exactly for the same seed and request sequence.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(store)
        }
    }

    pub fn with_config(store: S, config: &TriviaConfig) -> Self {
        let api = match config.quiz_seed {
            Some(seed) => Self::with_seed(store, seed),
            None => Self::new(store),
        };
        api.with_paginator(Paginator::new(config.page_size))
            .with_strict_categories(config.strict_categories)
    }

    pub fn with_paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = paginator;
        self
    }

    pub fn with_strict_categories(mut self, strict: bool) -> Self {
        self.strict_categories = strict;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn categories(&self) -> Result<CategoryList> {
        commands::categories::run(&self.store)
    }

    pub fn questions(&self, page: Option<&str>) -> Result<QuestionPage> {
        commands::list::run(&self.store, &self.paginator, parse_page(page))
    }

    pub fn question(&self, id: i64) -> Result<QuestionDetail> {
        commands::get::run(&self.store, id)
    }

    pub fn search(&self, term: &str, page: Option<&str>) -> Result<SearchResult> {
        commands::search::run(&self.store, &self.paginator, term, parse_page(page))
    }

    pub fn questions_by_category(
        &self,
        category_id: i64,
        page: Option<&str>,
    ) -> Result<CategoryQuestions> {
        commands::by_category::run(&self.store, &self.paginator, category_id, parse_page(page))
    }

    pub fn create_question(&mut self, draft: QuestionDraft, page: Option<&str>) -> Result<Created> {
        commands::create::run(
            &mut self.store,
            &self.paginator,
            draft,
            parse_page(page),
            self.strict_categories,
        )
    }

    pub fn delete_question(&mut self, id: i64, page: Option<&str>) -> Result<Deleted> {
        commands::delete::run(&mut self.store, &self.paginator, id, parse_page(page))
    }

    pub fn play_quiz(&mut self, request: &QuizRequest) -> Result<QuizResult> {
        commands::quiz::run(&self.store, request, &mut self.rng)
    }

    pub fn import(&mut self, document: ImportDocument) -> Result<ImportReport> {
        commands::import::run(&mut self.store, document, self.strict_categories)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<ImportReport> {
        commands::import::run_file(&mut self.store, path, self.strict_categories)
    }

    /// Seeds the default categories into an empty store. Returns how many were added.
    pub fn seed_default_categories(&mut self) -> Result<usize> {
        self.store.seed_default_categories()
    }
}
