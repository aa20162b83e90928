//! Client API access
//!
//! The backend is reached through the [`ClientApi`] trait so the TUI and the
//! CLI share one client built at startup, and tests can swap in a mock.

mod error;
mod http;

pub use error::ApiError;
pub use http::HttpClientApi;
pub(crate) use http::parse_base_url;

use crate::models::{ClientRecord, StatusUpdateRequest};
use async_trait::async_trait;

/// Path segments of the client collection endpoint
pub const CLIENTS_PATH: &[&str] = &["api", "clients"];

/// Path segments of the messaging-backed status update endpoint
pub const STATUS_UPDATE_PATH: &[&str] = &["kafka", "card-status", "update"];

/// Operations offered by the Client API backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientApi: Send + Sync {
    /// GET /api/clients
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError>;

    /// POST /api/clients, returning the record as stored by the backend
    async fn create_client(&self, client: &ClientRecord) -> Result<ClientRecord, ApiError>;

    /// GET /api/clients/{oib}
    async fn get_client(&self, oib: &str) -> Result<ClientRecord, ApiError>;

    /// DELETE /api/clients/{oib}
    async fn delete_client(&self, oib: &str) -> Result<(), ApiError>;

    /// POST /kafka/card-status/update
    ///
    /// Success only means the backend accepted the update for asynchronous
    /// processing. The returned message is the backend's acknowledgment text.
    async fn update_card_status(
        &self,
        request: &StatusUpdateRequest,
    ) -> Result<String, ApiError>;
}
