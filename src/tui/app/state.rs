//! Application state structures
//!
//! This module contains state sub-structures that organize the App's fields
//! into logical groupings for better maintainability and testability.

use crate::api::ApiError;
use crate::models::{
    CardStatus, ClientRecord, MAX_NAME_LENGTH, NewClientForm, OIB_LENGTH, StatusUpdateForm,
    StatusUpdateRequest,
};
use crate::services::Reply;
use crate::tui::constants::SEARCH_MAX_CHARS;
use crate::tui::input::TextInput;
use std::collections::VecDeque;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Panels that can hold keyboard focus, in Tab order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    EntryForm,
    ClientList,
    Search,
    StatusUpdate,
}

impl Panel {
    const ORDER: [Panel; 4] = [
        Panel::EntryForm,
        Panel::ClientList,
        Panel::Search,
        Panel::StatusUpdate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::EntryForm => "New Client",
            Panel::ClientList => "Clients",
            Panel::Search => "Search by OIB",
            Panel::StatusUpdate => "Update Card Status",
        }
    }
}

/// Fields of the entry form, top to bottom
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryField {
    FirstName,
    LastName,
    Oib,
    CardStatus,
}

impl EntryField {
    pub fn next(self) -> Self {
        match self {
            EntryField::FirstName => EntryField::LastName,
            EntryField::LastName => EntryField::Oib,
            EntryField::Oib => EntryField::CardStatus,
            EntryField::CardStatus => EntryField::FirstName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            EntryField::FirstName => EntryField::CardStatus,
            EntryField::LastName => EntryField::FirstName,
            EntryField::Oib => EntryField::LastName,
            EntryField::CardStatus => EntryField::Oib,
        }
    }
}

/// Fields of the status update form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusField {
    Oib,
    Status,
}

impl StatusField {
    pub fn toggle(self) -> Self {
        match self {
            StatusField::Oib => StatusField::Status,
            StatusField::Status => StatusField::Oib,
        }
    }
}

/// Buffers of the "add client" form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    pub first_name: TextInput,
    pub last_name: TextInput,
    pub oib: TextInput,
    pub card_status: CardStatus,
    pub focused: EntryField,
    /// Why the last submit was refused, if it was
    pub validation_hint: Option<String>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self {
            first_name: TextInput::new(MAX_NAME_LENGTH),
            last_name: TextInput::new(MAX_NAME_LENGTH),
            oib: TextInput::new(OIB_LENGTH),
            card_status: CardStatus::default(),
            focused: EntryField::FirstName,
            validation_hint: None,
        }
    }
}

impl EntryFormState {
    pub fn to_form(&self) -> NewClientForm {
        NewClientForm {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            oib: self.oib.value().to_string(),
            card_status: self.card_status,
        }
    }

    pub fn fill(&mut self, form: &NewClientForm) {
        self.first_name.set(&form.first_name);
        self.last_name.set(&form.last_name);
        self.oib.set(&form.oib);
        self.card_status = form.card_status;
    }

    /// Text buffer of the focused field, `None` on the status selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            EntryField::FirstName => Some(&mut self.first_name),
            EntryField::LastName => Some(&mut self.last_name),
            EntryField::Oib => Some(&mut self.oib),
            EntryField::CardStatus => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Search box and its last result
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: TextInput,
    pub result: Option<ClientRecord>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: TextInput::new(SEARCH_MAX_CHARS),
            result: None,
        }
    }
}

/// Buffers of the status update form
#[derive(Debug, Clone)]
pub struct StatusFormState {
    pub oib: TextInput,
    pub status: CardStatus,
    pub focused: StatusField,
    pub validation_hint: Option<String>,
}

impl Default for StatusFormState {
    fn default() -> Self {
        Self {
            oib: TextInput::new(OIB_LENGTH),
            status: CardStatus::default(),
            focused: StatusField::Oib,
            validation_hint: None,
        }
    }
}

impl StatusFormState {
    pub fn to_form(&self) -> StatusUpdateForm {
        StatusUpdateForm {
            oib: self.oib.value().to_string(),
            status: self.status,
        }
    }

    pub fn fill(&mut self, form: &StatusUpdateForm) {
        self.oib.set(&form.oib);
        self.status = form.status;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Cached list snapshot and the selection within it
#[derive(Debug, Default)]
pub struct ClientListState {
    pub clients: Vec<ClientRecord>,
    pub selected_index: usize,
    /// Local time of the last successful fetch
    pub last_refreshed: Option<chrono::DateTime<chrono::Local>>,
}

impl ClientListState {
    /// Replace the snapshot, keeping the selection in range
    pub fn replace(&mut self, clients: Vec<ClientRecord>) {
        self.clients = clients;
        self.selected_index = self
            .selected_index
            .min(self.clients.len().saturating_sub(1));
        self.last_refreshed = Some(chrono::Local::now());
    }

    pub fn selected(&self) -> Option<&ClientRecord> {
        self.clients.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.clients.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}

/// Message areas shown below the panels
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageState {
    pub response_message: Option<String>,
    pub error_message: Option<String>,
    pub status_update_message: Option<String>,
}

/// Delete awaiting confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub oib: String,
}

/// One action's request queue and in-flight slot
///
/// At most one request is in flight; queued requests go out in order as
/// each one completes. A latest-only slot keeps just the newest waiting
/// request instead.
#[derive(Debug)]
pub struct RequestSlot<Req, Resp> {
    queued: VecDeque<Req>,
    latest_only: bool,
    in_flight: Option<(Req, oneshot::Receiver<Result<Resp, ApiError>>)>,
}

impl<Req, Resp> Default for RequestSlot<Req, Resp> {
    fn default() -> Self {
        Self {
            queued: VecDeque::new(),
            latest_only: false,
            in_flight: None,
        }
    }
}

impl<Req: Clone, Resp> RequestSlot<Req, Resp> {
    /// Slot where a new request replaces the one still waiting
    pub fn latest_only() -> Self {
        Self {
            latest_only: true,
            ..Self::default()
        }
    }

    pub fn queue(&mut self, request: Req) {
        if self.latest_only {
            self.queued.clear();
        }
        self.queued.push_back(request);
    }

    pub fn is_queued(&self) -> bool {
        !self.queued.is_empty()
    }

    /// Number of requests waiting behind the in-flight one
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Take the oldest queued request if nothing is in flight
    ///
    /// Returns the request and the sender its result must be sent on.
    pub fn dispatch(&mut self) -> Option<(Req, Reply<Resp>)> {
        if self.in_flight.is_some() {
            return None;
        }
        let request = self.queued.pop_front()?;
        let (tx, rx) = oneshot::channel();
        self.in_flight = Some((request.clone(), rx));
        Some((request, tx))
    }

    /// Take the in-flight result if it has arrived
    ///
    /// A reply channel dropped without an answer completes with
    /// [`ApiError::Dropped`].
    pub fn try_complete(&mut self) -> Option<(Req, Result<Resp, ApiError>)> {
        let (_, rx) = self.in_flight.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(ApiError::Dropped),
        };
        self.in_flight.take().map(|(request, _)| (request, result))
    }
}

/// Async operation state (request slots and the pending confirmation)
///
/// Refreshes and searches keep only the newest waiting request; creates,
/// deletes and status updates are all sent, in the order they were made.
#[derive(Debug)]
pub struct AsyncOperationState {
    pub refresh: RequestSlot<(), Vec<ClientRecord>>,
    pub create: RequestSlot<ClientRecord, ClientRecord>,
    pub search: RequestSlot<String, ClientRecord>,
    pub delete: RequestSlot<String, ()>,
    pub status_update: RequestSlot<StatusUpdateRequest, String>,
    pub confirmation_pending: Option<PendingDelete>,
}

impl Default for AsyncOperationState {
    fn default() -> Self {
        Self {
            refresh: RequestSlot::latest_only(),
            create: RequestSlot::default(),
            search: RequestSlot::latest_only(),
            delete: RequestSlot::default(),
            status_update: RequestSlot::default(),
            confirmation_pending: None,
        }
    }
}

impl AsyncOperationState {
    /// Whether any request is in flight
    pub fn is_busy(&self) -> bool {
        self.refresh.is_in_flight()
            || self.create.is_in_flight()
            || self.search.is_in_flight()
            || self.delete.is_in_flight()
            || self.status_update.is_in_flight()
    }
}
