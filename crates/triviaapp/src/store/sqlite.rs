use super::DataStore;
use crate::error::{Result, TriviaError};
use crate::model::{Category, NewQuestion, Question};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    difficulty INTEGER NOT NULL,
    category   INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
";

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite-backed store. The schema is created when the database is opened.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "opening sqlite store");
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        register_functions(&conn)?;
        Ok(Self { conn })
    }

    fn query_questions(&self, filter: &str, args: &[&dyn rusqlite::ToSql]) -> Result<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions {} ORDER BY id",
            QUESTION_COLUMNS, filter
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(args, question_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(TriviaError::from)
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        label: row.get(1)?,
    })
}

/// Built-in `lower()` and `LIKE` only fold ASCII. `trivia_lower` folds with
/// Rust's Unicode case mapping, the same one `InMemoryStore` uses.
fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "trivia_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: String = ctx.get(0)?;
            Ok(text.to_lowercase())
        },
    )?;
    Ok(())
}

/// Lowercases the term and escapes LIKE wildcards so it matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl DataStore for SqliteStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], category_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(TriviaError::from)
    }

    fn get_category(&self, id: i64) -> Result<Category> {
        self.conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                category_from_row,
            )
            .optional()?
            .ok_or(TriviaError::CategoryNotFound(id))
    }

    fn insert_category(&mut self, id: Option<i64>, label: &str) -> Result<Category> {
        self.conn.execute(
            "INSERT INTO categories (id, type) VALUES (?1, ?2)",
            params![id, label],
        )?;
        Ok(Category {
            id: self.conn.last_insert_rowid(),
            label: label.to_string(),
        })
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        self.query_questions("", &[])
    }

    fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        self.query_questions("WHERE category = ?1", &[&category])
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let pattern = like_pattern(term);
        self.query_questions(
            "WHERE trivia_lower(question) LIKE ?1 ESCAPE '\\'",
            &[&pattern],
        )
    }

    fn get_question(&self, id: i64) -> Result<Question> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS);
        self.conn
            .query_row(&sql, params![id], question_from_row)
            .optional()?
            .ok_or(TriviaError::QuestionNotFound(id))
    }

    fn insert_question(&mut self, question: NewQuestion) -> Result<Question> {
        self.conn.execute(
            "INSERT INTO questions (question, answer, difficulty, category) VALUES (?1, ?2, ?3, ?4)",
            params![
                question.question,
                question.answer,
                question.difficulty,
                question.category
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(question.into_question(id))
    }

    fn delete_question(&mut self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(TriviaError::QuestionNotFound(id));
        }
        Ok(())
    }

    fn count_questions(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn store_with_categories() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.seed_default_categories().unwrap();
        store
    }

    fn add(store: &mut SqliteStore, text: &str, category: i64) -> Question {
        let draft = QuestionDraft::new(text, "answer", 2, category);
        store.insert_question(draft.validate().unwrap()).unwrap()
    }

    #[test]
    fn seeds_default_categories_in_order() {
        let store = store_with_categories();
        let labels: Vec<String> = store
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, super::super::DEFAULT_CATEGORIES.to_vec());
        assert_eq!(store.get_category(4).unwrap().label, "History");
    }

    #[test]
    fn missing_category_is_typed_error() {
        let store = store_with_categories();
        assert!(matches!(
            store.get_category(15),
            Err(TriviaError::CategoryNotFound(15))
        ));
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = store_with_categories();
        let a = add(&mut store, "first", 1);
        let b = add(&mut store, "second", 1);
        assert!(b.id > a.id);
        assert_eq!(store.get_question(a.id).unwrap(), a);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut store = store_with_categories();
        add(&mut store, "first", 1);
        let b = add(&mut store, "second", 1);
        store.delete_question(b.id).unwrap();
        let c = add(&mut store, "third", 1);
        assert!(c.id > b.id);
    }

    #[test]
    fn delete_missing_question_fails() {
        let mut store = store_with_categories();
        assert!(matches!(
            store.delete_question(500),
            Err(TriviaError::QuestionNotFound(500))
        ));
    }

    #[test]
    fn search_is_case_insensitive_and_literal() {
        let mut store = store_with_categories();
        add(&mut store, "What was the TITLE of the film?", 5);
        add(&mut store, "Who scored 100% in the test?", 1);
        add(&mut store, "Who scored 100 points?", 1);

        assert_eq!(store.search_questions("title").unwrap().len(), 1);
        assert_eq!(store.search_questions("100%").unwrap().len(), 1);
        assert_eq!(store.search_questions("sunlight").unwrap().len(), 0);
    }

    #[test]
    fn category_filter_and_count() {
        let mut store = store_with_categories();
        add(&mut store, "a", 5);
        add(&mut store, "b", 6);
        add(&mut store, "c", 5);
        let in_five = store.questions_in_category(5).unwrap();
        assert_eq!(in_five.len(), 2);
        assert!(in_five.iter().all(|q| q.category == 5));
        assert_eq!(store.count_questions().unwrap(), 3);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let mut store = store_with_categories();
        add(&mut store, "Which ÉCOLE trained Monet?", 2);
        add(&mut store, "Where is the Straße des 17. Juni?", 3);

        assert_eq!(store.search_questions("école").unwrap().len(), 1);
        assert_eq!(store.search_questions("ÉCOLE").unwrap().len(), 1);
        assert_eq!(store.search_questions("STRASSE").unwrap().len(), 0);
        assert_eq!(store.search_questions("STRAßE").unwrap().len(), 1);
    }

    #[test]
    fn search_agrees_with_memory_store() {
        use crate::store::memory::InMemoryStore;

        let mut sqlite = store_with_categories();
        let mut memory = InMemoryStore::new();
        for text in ["Which ÉCOLE trained Monet?", "Ärger im Paradies", "plain ascii TITLE"] {
            add(&mut sqlite, text, 1);
            let draft = QuestionDraft::new(text, "answer", 2, 1);
            memory.insert_question(draft.validate().unwrap()).unwrap();
        }
        for term in ["école", "ärger", "title", "É", "missing"] {
            assert_eq!(
                sqlite.search_questions(term).unwrap(),
                memory.search_questions(term).unwrap(),
                "term {:?}",
                term
            );
        }
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a_b%c"), "%a\\_b\\%c%");
        assert_eq!(like_pattern("Plain"), "%plain%");
    }
}
