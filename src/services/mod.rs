//! Service layer between the UI and the Client API
//!
//! Services run API calls and hand results back via channels, keeping the
//! TUI layer focused on presentation.

pub mod client_service;
pub mod messages;

pub use client_service::{ApiRequest, ClientService, Reply};
