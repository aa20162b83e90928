//! HTTP implementation of the Client API

use super::error::error_payload;
use super::{ApiError, CLIENTS_PATH, ClientApi, STATUS_UPDATE_PATH};
use crate::models::{ClientRecord, StatusUpdateRequest};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Client API reached over HTTP
///
/// Built once from the configured base URL and shared by every action.
#[derive(Debug, Clone)]
pub struct HttpClientApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClientApi {
    /// Create a client for the backend at `base_url`
    ///
    /// A path prefix on the base URL is kept: `http://host/prefix` serves
    /// `http://host/prefix/api/clients`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("clientcards/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport {
                url: base_url.to_string(),
                reason: format!("failed to create HTTP client: {}", e),
            })?;

        tracing::debug!("Created HTTP client for Client API at: {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL below the base URL
    ///
    /// Each segment is percent-encoded on its own, so an OIB can never
    /// escape its path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn client_endpoint(&self, oib: &str) -> Result<Url, ApiError> {
        let mut segments = CLIENTS_PATH.to_vec();
        segments.push(oib);
        self.endpoint(&segments)
    }

    /// Send a request and return the body of a successful response
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            tracing::debug!("{} returned {} with body: {}", url, status, text);
            return Err(ApiError::Rejected {
                url: url.to_string(),
                status: status.as_u16(),
                body: error_payload(&text),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl ClientApi for HttpClientApi {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        let url = self.endpoint(CLIENTS_PATH)?;
        tracing::debug!("GET {}", url);

        let text = self.execute(self.client.get(url.clone()), &url).await?;
        decode(&url, &text)
    }

    async fn create_client(&self, client: &ClientRecord) -> Result<ClientRecord, ApiError> {
        let url = self.endpoint(CLIENTS_PATH)?;
        tracing::debug!("POST {} for OIB {}", url, client.oib);

        let text = self
            .execute(self.client.post(url.clone()).json(client), &url)
            .await?;
        decode(&url, &text)
    }

    async fn get_client(&self, oib: &str) -> Result<ClientRecord, ApiError> {
        let url = self.client_endpoint(oib)?;
        tracing::debug!("GET {}", url);

        let text = self.execute(self.client.get(url.clone()), &url).await?;
        decode(&url, &text)
    }

    async fn delete_client(&self, oib: &str) -> Result<(), ApiError> {
        let url = self.client_endpoint(oib)?;
        tracing::debug!("DELETE {}", url);

        self.execute(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }

    async fn update_card_status(
        &self,
        request: &StatusUpdateRequest,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(STATUS_UPDATE_PATH)?;
        tracing::debug!(
            "POST {} for OIB {} -> {}",
            url,
            request.oib,
            request.status
        );

        let text = self
            .execute(self.client.post(url.clone()).json(request), &url)
            .await?;
        Ok(acknowledgment_message(&text))
    }
}

/// Parse and check a configured base URL
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!(
            "unsupported scheme '{}' (expected http or https)",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }

    Ok(url)
}

fn decode<T: DeserializeOwned>(url: &Url, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Text shown for a status update acknowledgment
///
/// A JSON string body is unwrapped; anything else is shown as sent.
fn acknowledgment_message(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::String(message)) => message,
        _ => text.to_string(),
    }
}
