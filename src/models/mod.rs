//! Client card model layer
//!
//! Structure:
//! - `client.rs` - Records exchanged with the Client API
//! - `card_status.rs` - The card status enum
//! - `forms.rs` - Form inputs and their client-side constraints

mod card_status;
mod client;
mod forms;

pub use card_status::CardStatus;
pub use client::{ClientRecord, MAX_NAME_LENGTH, OIB_LENGTH, StatusUpdateRequest};
pub use forms::{NewClientForm, StatusUpdateForm};
