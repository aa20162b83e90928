//! Constants used throughout the TUI module
//!
//! This module centralizes layout sizes and timings so the renderer and the
//! event loop agree on them.

/// Minimum terminal width required for the TUI
pub const MIN_TERMINAL_WIDTH: u16 = 80;

/// Minimum terminal height required for the TUI
pub const MIN_TERMINAL_HEIGHT: u16 = 24;

/// Header height (one line plus borders)
pub const HEADER_HEIGHT: u16 = 3;

/// Footer height (one line plus borders)
pub const FOOTER_HEIGHT: u16 = 3;

/// Messages panel height (success, error and status lines plus borders)
pub const MESSAGES_HEIGHT: u16 = 5;

/// Entry form height (four fields plus borders)
pub const ENTRY_FORM_HEIGHT: u16 = 6;

/// Status update form height (two fields plus borders)
pub const STATUS_FORM_HEIGHT: u16 = 4;

/// Confirmation dialog size
pub const CONFIRMATION_WIDTH: u16 = 72;
pub const CONFIRMATION_HEIGHT: u16 = 9;

/// How long the event loop waits for input before polling responses again
pub const EVENT_POLL_MS: u64 = 100;

/// Maximum length of the search box
pub const SEARCH_MAX_CHARS: usize = crate::models::OIB_LENGTH;
