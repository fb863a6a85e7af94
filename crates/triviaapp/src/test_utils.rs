use crate::api::TriviaApi;
use crate::store::sqlite::SqliteStore;
use crate::store::DataStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A SQLite-backed API on a throwaway database file.
pub struct TestEnv {
    // Held so the directory outlives the store.
    pub _temp_dir: TempDir,
    pub db_path: PathBuf,
    pub api: TriviaApi<SqliteStore>,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// Fresh database with the default categories and a fixed quiz seed.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("trivia.db");
        let mut store = SqliteStore::open(&db_path).expect("failed to open test database");
        store
            .seed_default_categories()
            .expect("failed to seed categories");
        Self {
            _temp_dir: temp_dir,
            db_path,
            api: TriviaApi::with_seed(store, 1),
        }
    }

    /// Reopens the same file, as a restarted server would.
    pub fn reopen(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path).expect("failed to reopen test database")
    }
}
