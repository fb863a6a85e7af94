//! # Trivia Binary
//!
//! The binary is intentionally thin: this file only invokes `cli::run()` and
//! handles process termination. Everything that knows about sockets lives in
//! `server/`, everything that knows about the terminal lives in `cli/`, and all
//! question bank behavior lives in the `triviaapp` library.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - config + logging setup, dispatch (commands.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (src/server/)                                   │
//! │  - axum Router, CORS and request logging middleware         │
//! │  - handlers translate requests into TriviaApi calls         │
//! │  - ApiError renders the failure envelope                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (triviaapp::api)                                 │
//! │  - Dispatches to command modules, returns typed results     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Router**: `server` tests drive the `Router` in process with
//!   `tower::ServiceExt::oneshot`, no socket involved.
//! - **CLI**: `tests/cli_e2e.rs` runs the built binary with `assert_cmd`.

mod cli;
mod server;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
