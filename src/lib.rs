//! Client card records library
//!
//! This library provides the core functionality for the clientcards TUI and
//! its headless commands. It can be used both as a binary and as a library
//! for testing.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use api::{ApiError, ClientApi, HttpClientApi};
pub use models::{CardStatus, ClientRecord, StatusUpdateRequest};
pub use services::{ApiRequest, ClientService};
