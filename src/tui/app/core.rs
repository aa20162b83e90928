//! Application state and main TUI logic

use super::state::{
    AsyncOperationState, ClientListState, EntryFormState, MessageState, Panel, PendingDelete,
    SearchState, StatusFormState,
};
use crate::models::{ClientRecord, NewClientForm, StatusUpdateForm};
use crate::tui::Theme;

/// Main application state
pub struct App {
    // Core data
    pub(crate) config: crate::config::Config,
    pub(crate) theme: Theme,

    // Organized state
    pub(crate) panel: Panel,
    pub(crate) entry_form: EntryFormState,
    pub(crate) list_state: ClientListState,
    pub(crate) search: SearchState,
    pub(crate) status_form: StatusFormState,
    pub(crate) messages: MessageState,
    pub(crate) async_state: AsyncOperationState,
}

impl App {
    /// Create the app with an initial list refresh queued
    pub fn new(config: crate::config::Config, theme: Theme) -> Self {
        let mut app = Self {
            config,
            theme,
            panel: Panel::EntryForm,
            entry_form: EntryFormState::default(),
            list_state: ClientListState::default(),
            search: SearchState::default(),
            status_form: StatusFormState::default(),
            messages: MessageState::default(),
            async_state: AsyncOperationState::default(),
        };
        app.request_refresh();
        app
    }

    pub fn config(&self) -> &crate::config::Config {
        &self.config
    }

    pub fn active_panel(&self) -> Panel {
        self.panel
    }

    pub fn focus(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.list_state.clients
    }

    pub fn selected_client(&self) -> Option<&ClientRecord> {
        self.list_state.selected()
    }

    pub fn last_refreshed(&self) -> Option<chrono::DateTime<chrono::Local>> {
        self.list_state.last_refreshed
    }

    pub fn search_result(&self) -> Option<&ClientRecord> {
        self.search.result.as_ref()
    }

    pub fn response_message(&self) -> Option<&str> {
        self.messages.response_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.messages.error_message.as_deref()
    }

    pub fn status_update_message(&self) -> Option<&str> {
        self.messages.status_update_message.as_deref()
    }

    /// OIB of the delete awaiting confirmation
    pub fn confirmation_pending(&self) -> Option<&str> {
        self.async_state
            .confirmation_pending
            .as_ref()
            .map(|pending| pending.oib.as_str())
    }

    pub fn is_busy(&self) -> bool {
        self.async_state.is_busy()
    }

    pub fn entry_form(&self) -> NewClientForm {
        self.entry_form.to_form()
    }

    pub fn set_entry_form(&mut self, form: &NewClientForm) {
        self.entry_form.fill(form);
    }

    pub fn entry_validation_hint(&self) -> Option<&str> {
        self.entry_form.validation_hint.as_deref()
    }

    pub fn search_query(&self) -> &str {
        self.search.query.value()
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search.query.set(query);
    }

    pub fn status_form(&self) -> StatusUpdateForm {
        self.status_form.to_form()
    }

    pub fn set_status_form(&mut self, form: &StatusUpdateForm) {
        self.status_form.fill(form);
    }

    pub fn status_validation_hint(&self) -> Option<&str> {
        self.status_form.validation_hint.as_deref()
    }

    /// Queue a fetch of the whole list
    pub fn request_refresh(&mut self) {
        self.async_state.refresh.queue(());
    }

    /// Submit the entry form
    ///
    /// Invalid input only sets the form's hint; nothing is sent and the
    /// message areas are left alone.
    pub fn submit_new_client(&mut self) {
        match self.entry_form.to_form().to_record() {
            Ok(record) => {
                self.entry_form.validation_hint = None;
                self.messages.response_message = None;
                self.messages.error_message = None;
                tracing::debug!("Queueing create for client {}", record.oib);
                self.async_state.create.queue(record);
            }
            Err(hint) => {
                tracing::debug!("Entry form refused: {}", hint);
                self.entry_form.validation_hint = Some(hint);
            }
        }
    }

    /// Look up the search box value as typed
    pub fn search_client(&mut self) {
        let oib = self.search.query.value().to_string();
        tracing::debug!("Queueing search for {:?}", oib);
        self.async_state.search.queue(oib);
    }

    /// Ask for confirmation before deleting `oib`
    pub fn request_delete(&mut self, oib: &str) {
        self.async_state.confirmation_pending = Some(PendingDelete {
            oib: oib.to_string(),
        });
    }

    /// Ask for confirmation before deleting the selected record
    pub fn request_delete_selected(&mut self) {
        if let Some(oib) = self.selected_client().map(|client| client.oib.clone()) {
            self.request_delete(&oib);
        }
    }

    /// Send the delete awaiting confirmation
    pub fn confirm_delete(&mut self) {
        if let Some(pending) = self.async_state.confirmation_pending.take() {
            tracing::debug!("Queueing delete for client {}", pending.oib);
            self.async_state.delete.queue(pending.oib);
        }
    }

    /// Drop the delete awaiting confirmation without sending anything
    pub fn cancel_delete(&mut self) {
        if let Some(pending) = self.async_state.confirmation_pending.take() {
            tracing::debug!("Delete of client {} cancelled", pending.oib);
        }
    }

    /// Submit the status update form
    pub fn submit_status_update(&mut self) {
        match self.status_form.to_form().to_request() {
            Ok(request) => {
                self.status_form.validation_hint = None;
                self.messages.status_update_message = None;
                tracing::debug!(
                    "Queueing status update {} -> {}",
                    request.oib,
                    request.status
                );
                self.async_state.status_update.queue(request);
            }
            Err(hint) => {
                self.status_form.validation_hint = Some(hint);
            }
        }
    }
}
