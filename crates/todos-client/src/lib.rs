//! Todos Client
//!
//! Wire model and HTTP loader for the remote todo list.
//!
//! The UI only ever reads from the remote source once, at mount. Status and
//! body interpretation lives in [`parse_todos`] so it can be exercised
//! without a network; [`TodosClient::fetch_todos`] is the thin async wrapper
//! around `reqwest` that feeds it.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{parse_todos, TodosClient};
pub use error::FetchError;
pub use models::Todo;
