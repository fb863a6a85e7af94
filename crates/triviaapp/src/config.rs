//! # Configuration
//!
//! Trivia configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TRIVIA_PAGE_SIZE`, `TRIVIA_BIND`, etc.
//! 2. **Config file**: `--config FILE`, or `trivia.toml` in the platform config
//!    directory (via `directories`). A missing file is skipped.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `page_size` | `TRIVIA_PAGE_SIZE` | `10` | Questions per page |
//! | `bind` | `TRIVIA_BIND` | `127.0.0.1:5000` | Listen address |
//! | `database` | `TRIVIA_DATABASE` | data dir `trivia.db` | SQLite file |
//! | `strict_categories` | `TRIVIA_STRICT_CATEGORIES` | `true` | Reject creates for unknown categories |
//! | `quiz_seed` | `TRIVIA_QUIZ_SEED` | none | Fixed seed for quiz draws |
//! | `log` | `TRIVIA_LOG` | `info` | Log filter directive |

use crate::error::{Result, TriviaError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "trivia.toml";
pub const DATABASE_FILE_NAME: &str = "trivia.db";

/// Configuration for the trivia server, stored in `trivia.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TriviaConfig {
    /// Questions per page for every paginated listing
    #[config(default = 10, env = "TRIVIA_PAGE_SIZE")]
    pub page_size: usize,

    /// Socket address the HTTP server binds to
    #[config(default = "127.0.0.1:5000", env = "TRIVIA_BIND")]
    pub bind: String,

    /// SQLite database file. When absent, `trivia.db` in the platform data dir.
    #[config(env = "TRIVIA_DATABASE")]
    pub database: Option<PathBuf>,

    /// Reject new questions whose category does not exist
    #[config(default = true, env = "TRIVIA_STRICT_CATEGORIES")]
    pub strict_categories: bool,

    /// Seed for quiz draws; random when absent
    #[config(env = "TRIVIA_QUIZ_SEED")]
    pub quiz_seed: Option<u64>,

    /// tracing filter directive, e.g. "info" or "triviaapp=debug"
    #[config(default = "info", env = "TRIVIA_LOG")]
    pub log: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            bind: "127.0.0.1:5000".to_string(),
            database: None,
            strict_categories: true,
            quiz_seed: None,
            log: "info".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "trivia")
}

/// `trivia.toml` in the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl TriviaConfig {
    /// Loads env over `path` (or the default config file) over defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(default_config_path);
        let mut builder = Self::builder().env();
        if let Some(file) = &file {
            builder = builder.file(file);
        }
        let config = builder
            .load()
            .map_err(|e| TriviaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TriviaError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// The configured database file, or `trivia.db` in the platform data dir.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
            .ok_or_else(|| TriviaError::Config("cannot determine a data directory".into()))
    }
}
