//! User-facing message text
//!
//! Shared by the TUI and the headless commands so both report outcomes with
//! the same wording.

use crate::api::ApiError;
use crate::models::ClientRecord;

pub const NO_CLIENTS: &str = "No clients available.";
pub const CLIENT_NOT_FOUND: &str = "Client not found.";
pub const SUBMIT_FAILED: &str = "An error occurred while submitting the form.";
pub const DELETE_FAILED: &str = "Error occurred while deleting client.";
pub const STATUS_UPDATE_FAILED: &str = "Error occurred while updating card status.";
pub const DELETE_CANCELLED: &str = "Deletion cancelled.";

pub fn client_added(record: &ClientRecord) -> String {
    format!("Client added: {} {}", record.first_name, record.last_name)
}

pub fn client_deleted(oib: &str) -> String {
    format!("Client with OIB {} has been deleted.", oib)
}

pub fn delete_confirmation(oib: &str) -> String {
    format!(
        "Are you sure you want to delete the client with OIB: {}?",
        oib
    )
}

/// Labelled fields of a single record, in display order
pub fn client_details(record: &ClientRecord) -> [(&'static str, String); 4] {
    [
        ("First Name", record.first_name.clone()),
        ("Last Name", record.last_name.clone()),
        ("OIB", record.oib.clone()),
        ("Status", record.card_status.to_string()),
    ]
}

/// Message for a failed create
///
/// Shows the backend's error payload as compact JSON when there is one.
pub fn submit_error(error: &ApiError) -> String {
    match error.payload() {
        Some(body) => format!("Error: {}", body),
        None => SUBMIT_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardStatus;
    use serde_json::json;

    #[test]
    fn test_client_added_uses_returned_names() {
        let record = ClientRecord::new("Ana", "Horvat", "12345678901", CardStatus::Pending);
        assert_eq!(client_added(&record), "Client added: Ana Horvat");
    }

    #[test]
    fn test_submit_error_serializes_payload_in_backend_order() {
        let error = ApiError::Rejected {
            url: "http://localhost:8080/api/clients".to_string(),
            status: 400,
            body: Some(json!({"oib": "size must be 11", "firstName": "must not be blank"})),
        };
        assert_eq!(
            submit_error(&error),
            r#"Error: {"oib":"size must be 11","firstName":"must not be blank"}"#
        );
    }

    #[test]
    fn test_submit_error_plain_text_payload_is_quoted() {
        let error = ApiError::Rejected {
            url: "http://localhost:8080/api/clients".to_string(),
            status: 500,
            body: Some(json!("Internal Server Error")),
        };
        assert_eq!(submit_error(&error), r#"Error: "Internal Server Error""#);
    }

    #[test]
    fn test_submit_error_without_payload_is_generic() {
        let error = ApiError::Transport {
            url: "http://localhost:8080/api/clients".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(submit_error(&error), SUBMIT_FAILED);

        let empty = ApiError::Rejected {
            url: "http://localhost:8080/api/clients".to_string(),
            status: 502,
            body: None,
        };
        assert_eq!(submit_error(&empty), SUBMIT_FAILED);
    }

    #[test]
    fn test_delete_messages() {
        assert_eq!(
            delete_confirmation("12345678901"),
            "Are you sure you want to delete the client with OIB: 12345678901?"
        );
        assert_eq!(
            client_deleted("12345678901"),
            "Client with OIB 12345678901 has been deleted."
        );
    }
}
