//! Form inputs and their client-side constraints
//!
//! Only the constraints an input element would enforce are checked here:
//! required names, name length, and OIB length. The backend stays
//! authoritative for everything else.

use super::{CardStatus, ClientRecord, StatusUpdateRequest};
use validator::{Validate, ValidationErrors};

/// Input of the "add client" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct NewClientForm {
    #[validate(length(min = 1, max = 30))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30))]
    pub last_name: String,
    #[validate(length(equal = 11))]
    pub oib: String,
    pub card_status: CardStatus,
}

impl NewClientForm {
    /// Validate the input and build the record to submit
    ///
    /// On failure returns a hint naming every offending field, in form order.
    pub fn to_record(&self) -> Result<ClientRecord, String> {
        self.validate().map_err(|errors| {
            summarize(
                &errors,
                &[
                    ("first_name", "First name is required (max 30 characters)"),
                    ("last_name", "Last name is required (max 30 characters)"),
                    ("oib", "OIB must be exactly 11 characters"),
                ],
            )
        })?;

        Ok(ClientRecord::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.oib.clone(),
            self.card_status,
        ))
    }
}

/// Input of the status update form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct StatusUpdateForm {
    #[validate(length(equal = 11))]
    pub oib: String,
    pub status: CardStatus,
}

impl StatusUpdateForm {
    /// Validate the input and build the request body
    pub fn to_request(&self) -> Result<StatusUpdateRequest, String> {
        self.validate().map_err(|errors| {
            summarize(&errors, &[("oib", "OIB must be exactly 11 characters")])
        })?;

        Ok(StatusUpdateRequest {
            oib: self.oib.clone(),
            status: self.status,
        })
    }
}

fn summarize(errors: &ValidationErrors, hints: &[(&str, &str)]) -> String {
    let field_errors = errors.field_errors();
    hints
        .iter()
        .filter(|(field, _)| field_errors.contains_key(*field))
        .map(|(_, hint)| *hint)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NewClientForm {
        NewClientForm {
            first_name: "Ana".to_string(),
            last_name: "Horvat".to_string(),
            oib: "12345678901".to_string(),
            card_status: CardStatus::default(),
        }
    }

    #[test]
    fn test_valid_form_builds_pending_record() {
        let record = valid_form().to_record().unwrap();
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.oib, "12345678901");
        assert_eq!(record.card_status, CardStatus::Pending);
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let form = NewClientForm {
            first_name: String::new(),
            last_name: String::new(),
            ..valid_form()
        };
        let hint = form.to_record().unwrap_err();
        assert_eq!(
            hint,
            "First name is required (max 30 characters); Last name is required (max 30 characters)"
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let form = NewClientForm {
            first_name: "Č".repeat(30),
            ..valid_form()
        };
        assert!(form.to_record().is_ok());

        let form = NewClientForm {
            first_name: "a".repeat(31),
            ..valid_form()
        };
        assert!(form.to_record().is_err());
    }

    #[test]
    fn test_oib_must_be_exactly_eleven_characters() {
        for oib in ["1234567890", "123456789012", ""] {
            let form = NewClientForm {
                oib: oib.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.to_record().unwrap_err(),
                "OIB must be exactly 11 characters"
            );
        }
    }

    #[test]
    fn test_oib_format_is_not_checked_beyond_length() {
        let form = NewClientForm {
            oib: "ABCDEFGHIJK".to_string(),
            ..valid_form()
        };
        assert!(form.to_record().is_ok());
    }

    #[test]
    fn test_status_update_form() {
        let form = StatusUpdateForm {
            oib: "12345678901".to_string(),
            status: CardStatus::Approved,
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.status, CardStatus::Approved);

        let short = StatusUpdateForm {
            oib: "123".to_string(),
            ..form
        };
        assert!(short.to_request().is_err());
    }
}
