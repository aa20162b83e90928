//! Rendering logic for the application
//!
//! This module contains the main render entry point and the layout
//! calculation.

use super::core::App;
use super::state::Panel;
use crate::tui::constants::{
    CONFIRMATION_HEIGHT, CONFIRMATION_WIDTH, ENTRY_FORM_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT,
    MESSAGES_HEIGHT, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH, STATUS_FORM_HEIGHT,
};
use crate::tui::views::{self, helpers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

impl App {
    /// Main render entry point
    ///
    /// Renders the entire TUI interface based on current application state
    pub fn render(&self, f: &mut Frame) {
        let area = f.area();
        if area.width < MIN_TERMINAL_WIDTH || area.height < MIN_TERMINAL_HEIGHT {
            helpers::render_size_notice(
                f,
                area,
                MIN_TERMINAL_WIDTH,
                MIN_TERMINAL_HEIGHT,
                &self.theme,
            );
            return;
        }

        let header_height = if self.config.ui.headless {
            0
        } else {
            HEADER_HEIGHT
        };
        let [header_area, body_area, messages_area, footer_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(MESSAGES_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body_area);
        let [entry_area, search_area] =
            Layout::vertical([Constraint::Length(ENTRY_FORM_HEIGHT), Constraint::Min(0)])
                .areas(left_area);
        let [list_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_FORM_HEIGHT)])
                .areas(right_area);

        if !self.config.ui.headless {
            views::render_header(
                f,
                header_area,
                &self.config.api.base_url,
                self.list_state.clients.len(),
                self.list_state.last_refreshed,
                self.is_busy(),
                &self.theme,
            );
        }

        views::render_entry_form(
            f,
            entry_area,
            &self.entry_form,
            self.panel == Panel::EntryForm,
            &self.theme,
        );
        views::render_search(
            f,
            search_area,
            &self.search,
            self.panel == Panel::Search,
            &self.theme,
        );
        views::render_client_list(
            f,
            list_area,
            &self.list_state.clients,
            self.list_state.selected_index,
            self.panel == Panel::ClientList,
            &self.theme,
        );
        views::render_status_update(
            f,
            status_area,
            &self.status_form,
            self.panel == Panel::StatusUpdate,
            &self.theme,
        );
        views::render_messages(f, messages_area, &self.messages, &self.theme);

        let confirming = self.async_state.confirmation_pending.as_ref();
        views::render_footer(
            f,
            footer_area,
            self.panel,
            confirming.is_some(),
            &self.theme,
        );

        if let Some(pending) = confirming {
            let dialog = helpers::centered_rect(CONFIRMATION_WIDTH, CONFIRMATION_HEIGHT, area);
            views::render_confirmation(f, dialog, &pending.oib, &self.theme);
        }
    }
}
