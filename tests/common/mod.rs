//! In-process fake of the Client API backend
//!
//! Serves the same routes as the real backend on an ephemeral port and
//! records what it was asked to do.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clientcards::models::{ClientRecord, StatusUpdateRequest};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const STATUS_ACK: &str = "Card status update sent to Kafka";

#[derive(Clone, Default)]
pub struct FakeBackend {
    pub clients: Arc<Mutex<Vec<ClientRecord>>>,
    pub status_updates: Arc<Mutex<Vec<StatusUpdateRequest>>>,
    pub list_calls: Arc<Mutex<usize>>,
    pub delete_calls: Arc<Mutex<usize>>,
    /// When set, the status update endpoint answers 500
    pub fail_status_updates: Arc<Mutex<bool>>,
}

impl FakeBackend {
    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        let backend = Self::default();
        *backend.clients.lock().unwrap() = clients;
        backend
    }

    pub fn clients(&self) -> Vec<ClientRecord> {
        self.clients.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn delete_calls(&self) -> usize {
        *self.delete_calls.lock().unwrap()
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/api/clients", get(list_clients).post(create_client))
            .route("/api/clients/:oib", get(get_client).delete(delete_client))
            .route("/kafka/card-status/update", post(update_card_status))
            .with_state(self.clone())
    }

    /// Serve on 127.0.0.1 and return the base URL
    pub async fn spawn(&self) -> String {
        self.spawn_at("").await
    }

    /// Serve below `prefix` (e.g. "/backend") and return the base URL
    pub async fn spawn_at(&self, prefix: &str) -> String {
        let app = if prefix.is_empty() {
            self.routes()
        } else {
            Router::new().nest(prefix, self.routes())
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}{}", addr, prefix)
    }
}

async fn list_clients(State(backend): State<FakeBackend>) -> Json<Vec<ClientRecord>> {
    *backend.list_calls.lock().unwrap() += 1;
    Json(backend.clients())
}

async fn create_client(
    State(backend): State<FakeBackend>,
    Json(client): Json<ClientRecord>,
) -> Response {
    if client.oib.chars().count() != 11 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"oib": "OIB must have exactly 11 characters"})),
        )
            .into_response();
    }

    let mut clients = backend.clients.lock().unwrap();
    if clients.iter().any(|c| c.oib == client.oib) {
        return (StatusCode::CONFLICT, "Client with this OIB already exists").into_response();
    }
    clients.push(client.clone());
    (StatusCode::CREATED, Json(client)).into_response()
}

async fn get_client(State(backend): State<FakeBackend>, Path(oib): Path<String>) -> Response {
    let clients = backend.clients.lock().unwrap();
    match clients.iter().find(|c| c.oib == oib) {
        Some(client) => Json(client.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_client(State(backend): State<FakeBackend>, Path(oib): Path<String>) -> StatusCode {
    *backend.delete_calls.lock().unwrap() += 1;
    let mut clients = backend.clients.lock().unwrap();
    let before = clients.len();
    clients.retain(|c| c.oib != oib);
    if clients.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn update_card_status(
    State(backend): State<FakeBackend>,
    Json(request): Json<StatusUpdateRequest>,
) -> Response {
    if *backend.fail_status_updates.lock().unwrap() {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    backend.status_updates.lock().unwrap().push(request);
    STATUS_ACK.into_response()
}
