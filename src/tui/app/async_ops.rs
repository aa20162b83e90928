//! Async operation management
//!
//! Queued actions leave the app as [`ApiRequest`]s carrying a oneshot reply
//! sender. The event loop executes them on spawned tasks and the app picks
//! the results up on its next poll.

use super::core::App;
use crate::api::ApiError;
use crate::models::{ClientRecord, StatusUpdateRequest};
use crate::services::{ApiRequest, messages};

impl App {
    /// Take every request that can be dispatched now
    ///
    /// An action with a request in flight keeps its queued request until
    /// the in-flight one completes.
    pub fn take_requests(&mut self) -> Vec<ApiRequest> {
        let mut requests = Vec::new();

        if let Some(((), reply)) = self.async_state.refresh.dispatch() {
            requests.push(ApiRequest::ListClients { reply });
        }
        if let Some((client, reply)) = self.async_state.create.dispatch() {
            requests.push(ApiRequest::CreateClient { client, reply });
        }
        if let Some((oib, reply)) = self.async_state.search.dispatch() {
            requests.push(ApiRequest::GetClient { oib, reply });
        }
        if let Some((oib, reply)) = self.async_state.delete.dispatch() {
            requests.push(ApiRequest::DeleteClient { oib, reply });
        }
        if let Some((request, reply)) = self.async_state.status_update.dispatch() {
            requests.push(ApiRequest::UpdateCardStatus { request, reply });
        }

        requests
    }

    /// Apply every result that has arrived
    ///
    /// Returns true when anything changed.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;

        if let Some(((), result)) = self.async_state.refresh.try_complete() {
            self.complete_refresh(result);
            changed = true;
        }
        if let Some((_, result)) = self.async_state.create.try_complete() {
            self.complete_create(result);
            changed = true;
        }
        if let Some((oib, result)) = self.async_state.search.try_complete() {
            self.complete_search(&oib, result);
            changed = true;
        }
        if let Some((oib, result)) = self.async_state.delete.try_complete() {
            self.complete_delete(&oib, result);
            changed = true;
        }
        if let Some((request, result)) = self.async_state.status_update.try_complete() {
            self.complete_status_update(&request, result);
            changed = true;
        }

        changed
    }

    fn complete_refresh(&mut self, result: Result<Vec<ClientRecord>, ApiError>) {
        match result {
            Ok(clients) => self.list_state.replace(clients),
            // Listing failures stay out of the message areas
            Err(e) => tracing::warn!(
                "Keeping {} cached clients after failed refresh: {}",
                self.list_state.clients.len(),
                e
            ),
        }
    }

    fn complete_create(&mut self, result: Result<ClientRecord, ApiError>) {
        match result {
            Ok(created) => {
                self.messages.response_message = Some(messages::client_added(&created));
                self.entry_form.reset();
                self.request_refresh();
            }
            Err(e) => {
                self.messages.error_message = Some(messages::submit_error(&e));
            }
        }
    }

    fn complete_search(&mut self, oib: &str, result: Result<ClientRecord, ApiError>) {
        match result {
            Ok(client) => {
                self.search.result = Some(client);
                self.messages.error_message = None;
            }
            Err(e) => {
                tracing::debug!("No client for {:?}: {}", oib, e);
                self.search.result = None;
                self.messages.error_message = Some(messages::CLIENT_NOT_FOUND.to_string());
            }
        }
    }

    fn complete_delete(&mut self, oib: &str, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.messages.response_message = Some(messages::client_deleted(oib));
                self.request_refresh();
            }
            Err(_) => {
                self.messages.error_message = Some(messages::DELETE_FAILED.to_string());
            }
        }
    }

    /// The backend applies the update later, so the refresh may still show
    /// the old status.
    fn complete_status_update(
        &mut self,
        request: &StatusUpdateRequest,
        result: Result<String, ApiError>,
    ) {
        match result {
            Ok(message) => {
                self.messages.status_update_message = Some(message);
                self.status_form.reset();
            }
            Err(e) => {
                tracing::debug!("Status update for {} failed: {}", request.oib, e);
                self.messages.status_update_message =
                    Some(messages::STATUS_UPDATE_FAILED.to_string());
            }
        }
        self.request_refresh();
    }
}
