//! TUI view components
//!
//! This module contains all the rendering components for the panels of the
//! interface. Each component is responsible for rendering a specific part of
//! the screen.

mod client_list;
mod confirmation;
mod entry_form;
mod footer;
mod header;
pub mod helpers;
mod messages;
mod search;
mod status_update;

pub use client_list::*;
pub use confirmation::*;
pub use entry_form::render_entry_form;
pub use footer::*;
pub use header::*;
pub use messages::*;
pub use search::*;
pub use status_update::*;
