//! # CLI Behavior
//!
//! This is the process entry for the trivia server. It is the only place that
//! knows about terminal I/O, exit codes and log subscriber setup.
//!
//! ## Commands
//!
//! - `trivia serve`: run the HTTP API on the configured address. `--memory`
//!   serves a throwaway in-memory bank seeded with the default categories.
//! - `trivia init`: create the database file and seed the default categories.
//! - `trivia import FILE`: bulk load categories and questions from JSON.
//!
//! Every command accepts `--config FILE`; see [`triviaapp::config`] for the
//! resolution order.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Config loading, logging, dispatch and handlers
//! - `styles`: Terminal styling for status messages

mod commands;
pub mod setup;
mod styles;

pub use commands::run;
