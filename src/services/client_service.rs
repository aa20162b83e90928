//! Client service
//!
//! Wraps the shared [`ClientApi`] and runs requests queued by the UI. Each
//! request carries a oneshot sender; the result goes back over it and the UI
//! applies it on its next poll.

use crate::api::{ApiError, ClientApi, HttpClientApi};
use crate::models::{ClientRecord, StatusUpdateRequest};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Channel a request's result is sent back on
pub type Reply<T> = oneshot::Sender<Result<T, ApiError>>;

/// A request ready to be executed against the Client API
#[derive(Debug)]
pub enum ApiRequest {
    ListClients {
        reply: Reply<Vec<ClientRecord>>,
    },
    CreateClient {
        client: ClientRecord,
        reply: Reply<ClientRecord>,
    },
    GetClient {
        oib: String,
        reply: Reply<ClientRecord>,
    },
    DeleteClient {
        oib: String,
        reply: Reply<()>,
    },
    UpdateCardStatus {
        request: StatusUpdateRequest,
        reply: Reply<String>,
    },
}

impl ApiRequest {
    /// Short name of the action, for logging
    pub fn action(&self) -> &'static str {
        match self {
            ApiRequest::ListClients { .. } => "list",
            ApiRequest::CreateClient { .. } => "create",
            ApiRequest::GetClient { .. } => "search",
            ApiRequest::DeleteClient { .. } => "delete",
            ApiRequest::UpdateCardStatus { .. } => "status-update",
        }
    }
}

/// Service for Client API actions
#[derive(Clone)]
pub struct ClientService {
    api: Arc<dyn ClientApi>,
}

impl ClientService {
    pub fn new(api: Arc<dyn ClientApi>) -> Self {
        Self { api }
    }

    /// Build the service over HTTP for the backend at `base_url`
    pub fn connect(base_url: &str) -> Result<Self, ApiError> {
        let api = HttpClientApi::new(base_url)?;
        Ok(Self::new(Arc::new(api)))
    }

    pub async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        let result = self.api.list_clients().await;
        match &result {
            Ok(clients) => tracing::debug!("Fetched {} clients", clients.len()),
            Err(e) => tracing::warn!("Error fetching clients: {}", e),
        }
        result
    }

    pub async fn create_client(&self, client: &ClientRecord) -> Result<ClientRecord, ApiError> {
        let result = self.api.create_client(client).await;
        match &result {
            Ok(created) => tracing::info!("Client {} created", created.oib),
            Err(e) => tracing::warn!("Failed to create client {}: {}", client.oib, e),
        }
        result
    }

    pub async fn get_client(&self, oib: &str) -> Result<ClientRecord, ApiError> {
        let result = self.api.get_client(oib).await;
        if let Err(ref e) = result {
            tracing::debug!("Lookup of client {} failed: {}", oib, e);
        }
        result
    }

    pub async fn delete_client(&self, oib: &str) -> Result<(), ApiError> {
        let result = self.api.delete_client(oib).await;
        match &result {
            Ok(()) => tracing::info!("Client {} deleted", oib),
            Err(e) => tracing::warn!("Failed to delete client {}: {}", oib, e),
        }
        result
    }

    /// Submit a card status update
    ///
    /// The backend forwards the update through its messaging pipeline, so a
    /// successful answer does not mean the record has changed yet.
    pub async fn update_card_status(
        &self,
        request: &StatusUpdateRequest,
    ) -> Result<String, ApiError> {
        let result = self.api.update_card_status(request).await;
        match &result {
            Ok(_) => tracing::info!(
                "Status update {} -> {} accepted by the backend",
                request.oib,
                request.status
            ),
            Err(e) => tracing::warn!("Status update for {} failed: {}", request.oib, e),
        }
        result
    }

    /// Run a queued request and send its result back
    pub async fn execute(&self, request: ApiRequest) {
        tracing::debug!("Executing {} request", request.action());

        // The UI may have gone away; a closed reply channel is fine.
        match request {
            ApiRequest::ListClients { reply } => {
                let _ = reply.send(self.list_clients().await);
            }
            ApiRequest::CreateClient { client, reply } => {
                let _ = reply.send(self.create_client(&client).await);
            }
            ApiRequest::GetClient { oib, reply } => {
                let _ = reply.send(self.get_client(&oib).await);
            }
            ApiRequest::DeleteClient { oib, reply } => {
                let _ = reply.send(self.delete_client(&oib).await);
            }
            ApiRequest::UpdateCardStatus { request, reply } => {
                let _ = reply.send(self.update_card_status(&request).await);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockClientApi;
    use crate::models::CardStatus;

    fn ana() -> ClientRecord {
        ClientRecord::new("Ana", "Horvat", "12345678901", CardStatus::Pending)
    }

    #[tokio::test]
    async fn test_execute_list_replies_with_records() {
        let mut api = MockClientApi::new();
        api.expect_list_clients()
            .times(1)
            .returning(|| Ok(vec![ana()]));

        let service = ClientService::new(Arc::new(api));
        let (reply, rx) = oneshot::channel();
        service.execute(ApiRequest::ListClients { reply }).await;

        assert_eq!(rx.await.unwrap().unwrap(), vec![ana()]);
    }

    #[tokio::test]
    async fn test_execute_create_passes_record_through() {
        let mut api = MockClientApi::new();
        api.expect_create_client()
            .withf(|client| client.oib == "12345678901")
            .times(1)
            .returning(|client| Ok(client.clone()));

        let service = ClientService::new(Arc::new(api));
        let (reply, rx) = oneshot::channel();
        service
            .execute(ApiRequest::CreateClient {
                client: ana(),
                reply,
            })
            .await;

        assert_eq!(rx.await.unwrap().unwrap().first_name, "Ana");
    }

    #[tokio::test]
    async fn test_execute_delete_reports_failure() {
        let mut api = MockClientApi::new();
        api.expect_delete_client()
            .withf(|oib| oib.to_string() == "12345678901")
            .times(1)
            .returning(|_| {
                Err(ApiError::Rejected {
                    url: "http://localhost:8080/api/clients/12345678901".to_string(),
                    status: 404,
                    body: None,
                })
            });

        let service = ClientService::new(Arc::new(api));
        let (reply, rx) = oneshot::channel();
        service
            .execute(ApiRequest::DeleteClient {
                oib: "12345678901".to_string(),
                reply,
            })
            .await;

        assert!(rx.await.unwrap().unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_execute_tolerates_dropped_receiver() {
        let mut api = MockClientApi::new();
        api.expect_update_card_status()
            .times(1)
            .returning(|_| Ok("queued".to_string()));

        let service = ClientService::new(Arc::new(api));
        let (reply, rx) = oneshot::channel();
        drop(rx);
        service
            .execute(ApiRequest::UpdateCardStatus {
                request: StatusUpdateRequest {
                    oib: "12345678901".to_string(),
                    status: CardStatus::Approved,
                },
                reply,
            })
            .await;
    }

    #[test]
    fn test_connect_rejects_bad_base_url() {
        assert!(ClientService::connect("localhost").is_err());
    }
}
