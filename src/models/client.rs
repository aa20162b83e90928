//! Client record types exchanged with the Client API

use super::CardStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters in an OIB
pub const OIB_LENGTH: usize = 11;

/// Maximum number of characters in a first or last name
pub const MAX_NAME_LENGTH: usize = 30;

/// A client record as returned by the backend
///
/// The backend owns these; the UI only holds transient copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub first_name: String,
    pub last_name: String,
    pub oib: String,
    #[serde(default)]
    pub card_status: CardStatus,
}

impl ClientRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        oib: impl Into<String>,
        card_status: CardStatus,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            oib: oib.into(),
            card_status,
        }
    }
}

/// List line format: `<first> <last> - OIB: <oib> - Status: <status>`
impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - OIB: {} - Status: {}",
            self.first_name, self.last_name, self.oib, self.card_status
        )
    }
}

/// Body of a status update posted to the messaging-backed endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub oib: String,
    pub status: CardStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_on_the_wire() {
        let record = ClientRecord::new("Ana", "Horvat", "12345678901", CardStatus::Approved);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ana",
                "lastName": "Horvat",
                "oib": "12345678901",
                "cardStatus": "APPROVED"
            })
        );
    }

    #[test]
    fn test_missing_card_status_defaults_to_pending() {
        let record: ClientRecord = serde_json::from_str(
            r#"{"firstName":"Ivo","lastName":"Kovač","oib":"98765432109"}"#,
        )
        .unwrap();
        assert_eq!(record.card_status, CardStatus::Pending);
    }

    #[test]
    fn test_display_line() {
        let record = ClientRecord::new("Ana", "Horvat", "12345678901", CardStatus::Pending);
        assert_eq!(
            record.to_string(),
            "Ana Horvat - OIB: 12345678901 - Status: PENDING"
        );
    }

    #[test]
    fn test_status_update_body() {
        let request = StatusUpdateRequest {
            oib: "12345678901".to_string(),
            status: CardStatus::Rejected,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"oib":"12345678901","status":"REJECTED"}"#
        );
    }
}
