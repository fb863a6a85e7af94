//! # Triviaapp Architecture
//!
//! Triviaapp is a **UI-agnostic trivia question bank**. The HTTP server in the
//! `trivia` crate is one client of it; the CLI is another. Nothing in here knows
//! about sockets, status lines or terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade owning the store, paginator and random source     │
//! │  - Normalizes raw inputs (page numbers, drafts)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Listing, search, category filter, create, delete, quiz   │
//! │  - Operates on Rust types, returns serializable results     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failures
//!
//! Every operation returns [`error::Result`]. Each [`error::TriviaError`]
//! variant belongs to exactly one [`error::ErrorKind`], which carries the
//! status code and fixed message a web client sees. Callers never need to
//! inspect error strings.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `InMemoryStore`.
//! 2. **Store**: SQLite behavior on temporary databases.
//! 3. **API**: dispatch and input normalization, plus integration tests in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation
//! - [`pagination`]: Fixed-size page slicing
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Question`, `Category` and request drafts
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and their classification

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
