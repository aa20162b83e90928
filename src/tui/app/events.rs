//! Event handling for the application
//!
//! This module contains all input handling logic: panel focus, form editing,
//! list navigation, and the delete confirmation dialog.

use super::core::App;
use super::state::{EntryField, Panel, StatusField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, None for normal continuation
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(true);
        }

        // Handle confirmation dialog first
        if self.async_state.confirmation_pending.is_some() {
            return self.handle_confirmation_key(key);
        }

        match key.code {
            KeyCode::Esc => return Some(true),
            KeyCode::Tab => {
                self.panel = self.panel.next();
                return None;
            }
            KeyCode::BackTab => {
                self.panel = self.panel.previous();
                return None;
            }
            _ => {}
        }

        match self.panel {
            Panel::EntryForm => self.handle_entry_key(key),
            Panel::ClientList => self.handle_list_key(key),
            Panel::Search => self.handle_search_key(key),
            Panel::StatusUpdate => self.handle_status_key(key),
        }
        None
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.cancel_delete(),
            _ => {}
        }
        None
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_new_client();
            return;
        }

        let form = &mut self.entry_form;
        match key.code {
            KeyCode::Up => form.focused = form.focused.previous(),
            KeyCode::Down => form.focused = form.focused.next(),
            KeyCode::Left if form.focused == EntryField::CardStatus => {
                form.card_status = form.card_status.previous();
            }
            KeyCode::Right | KeyCode::Char(' ') if form.focused == EntryField::CardStatus => {
                form.card_status = form.card_status.next();
            }
            KeyCode::Backspace => {
                if let Some(input) = form.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c) if is_text_input(&key) => {
                if let Some(input) = form.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list_state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.list_state.select_next(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete_selected(),
            KeyCode::Char('r') => self.request_refresh(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.search_client(),
            KeyCode::Backspace => self.search.query.pop(),
            KeyCode::Char(c) if is_text_input(&key) => {
                self.search.query.push(c);
            }
            _ => {}
        }
    }

    fn handle_status_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_status_update();
            return;
        }

        let form = &mut self.status_form;
        match key.code {
            KeyCode::Up | KeyCode::Down => form.focused = form.focused.toggle(),
            KeyCode::Left if form.focused == StatusField::Status => {
                form.status = form.status.previous();
            }
            KeyCode::Right | KeyCode::Char(' ') if form.focused == StatusField::Status => {
                form.status = form.status.next();
            }
            KeyCode::Backspace if form.focused == StatusField::Oib => form.oib.pop(),
            KeyCode::Char(c) if form.focused == StatusField::Oib && is_text_input(&key) => {
                form.oib.push(c);
            }
            _ => {}
        }
    }
}

/// Printable key without Ctrl or Alt held
fn is_text_input(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
