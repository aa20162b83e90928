//! Card status definitions
//!
//! The backend owns the meaning of each status. Client-side, any status may
//! move to any other; the UI only cycles through the values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a client's card request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CardStatus {
    /// Get the wire name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Pending => "PENDING",
            CardStatus::Approved => "APPROVED",
            CardStatus::Rejected => "REJECTED",
        }
    }

    /// All statuses in selector order
    pub fn all() -> &'static [Self] {
        &[
            CardStatus::Pending,
            CardStatus::Approved,
            CardStatus::Rejected,
        ]
    }

    /// Next status in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            CardStatus::Pending => CardStatus::Approved,
            CardStatus::Approved => CardStatus::Rejected,
            CardStatus::Rejected => CardStatus::Pending,
        }
    }

    /// Previous status in selector order, wrapping around
    pub fn previous(self) -> Self {
        match self {
            CardStatus::Pending => CardStatus::Rejected,
            CardStatus::Approved => CardStatus::Pending,
            CardStatus::Rejected => CardStatus::Approved,
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = String;

    /// Accepts the wire names in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(CardStatus::Pending),
            "APPROVED" => Ok(CardStatus::Approved),
            "REJECTED" => Ok(CardStatus::Rejected),
            _ => Err(format!(
                "Unknown card status: {} (expected PENDING, APPROVED or REJECTED)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(CardStatus::default(), CardStatus::Pending);
    }

    #[test]
    fn test_cycle_visits_every_status() {
        let mut status = CardStatus::Pending;
        let mut seen = Vec::new();
        for _ in 0..CardStatus::all().len() {
            seen.push(status);
            status = status.next();
        }
        assert_eq!(seen, CardStatus::all());
        assert_eq!(status, CardStatus::Pending);
        assert_eq!(CardStatus::Pending.previous(), CardStatus::Rejected);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("approved".parse::<CardStatus>(), Ok(CardStatus::Approved));
        assert_eq!("REJECTED".parse::<CardStatus>(), Ok(CardStatus::Rejected));
        assert!("CLOSED".parse::<CardStatus>().is_err());
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&CardStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        let status: CardStatus = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(status, CardStatus::Rejected);
    }
}
