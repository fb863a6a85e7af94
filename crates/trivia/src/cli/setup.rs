use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trivia", bin_name = "trivia", version)]
#[command(about = "Trivia question bank: JSON API server and admin tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: trivia.toml in the platform config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// SQLite database file
        #[arg(long, value_name = "PATH")]
        db: Option<PathBuf>,

        /// Serve an in-memory bank that is discarded on exit
        #[arg(long, conflicts_with = "db")]
        memory: bool,
    },

    /// Create the database and seed the default categories
    Init {
        /// SQLite database file
        #[arg(long, value_name = "PATH")]
        db: Option<PathBuf>,
    },

    /// Load categories and questions from a JSON file
    Import {
        /// JSON document: {"categories": [...], "questions": [...]}
        file: PathBuf,

        /// SQLite database file
        #[arg(long, value_name = "PATH")]
        db: Option<PathBuf>,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(["trivia", "serve", "--bind", "0.0.0.0:8080", "--memory"]);
        match cli.command {
            Commands::Serve { bind, db, memory } => {
                assert_eq!(bind.as_deref(), Some("0.0.0.0:8080"));
                assert!(db.is_none());
                assert!(memory);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_memory_conflicts_with_db() {
        let result = Cli::try_parse_from(["trivia", "serve", "--memory", "--db", "x.db"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["trivia", "import", "seed.json", "--config", "t.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("t.toml")));
        assert!(matches!(cli.command, Commands::Import { .. }));
    }
}
