//! Theme and styling definitions
//!
//! This module provides a centralized place for all color and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
pub struct Theme {
    // Header colors
    pub header_title: Color,
    pub header_label: Color,
    pub header_value: Color,
    pub header_busy: Color,

    // Panel colors
    pub border: Color,
    pub border_focused: Color,

    // Form colors
    pub field_label: Color,
    pub field_value: Color,
    pub field_focused: Color,
    pub validation_hint: Color,

    // List colors
    pub table_selected: Color,
    pub table_selected_bg: Color,
    pub table_normal: Color,
    pub text_secondary: Color,

    // Card status colors
    pub status_pending: Color,
    pub status_approved: Color,
    pub status_rejected: Color,

    // Message colors
    pub message_success: Color,
    pub message_error: Color,
    pub message_status: Color,

    // Confirmation colors
    pub operation_warning: Color,
    pub operation_confirm: Color,
    pub operation_cancel: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_title: Color::Cyan,
            header_label: Color::Gray,
            header_value: Color::Yellow,
            header_busy: Color::Magenta,

            border: Color::Cyan,
            border_focused: Color::Yellow,

            field_label: Color::Cyan,
            field_value: Color::White,
            field_focused: Color::Yellow,
            validation_hint: Color::Red,

            table_selected: Color::Blue,
            table_selected_bg: Color::DarkGray,
            table_normal: Color::White,
            text_secondary: Color::Gray,

            status_pending: Color::Yellow,
            status_approved: Color::Green,
            status_rejected: Color::Red,

            message_success: Color::Green,
            message_error: Color::Red,
            message_status: Color::Cyan,

            operation_warning: Color::Yellow,
            operation_confirm: Color::Green,
            operation_cancel: Color::Red,

            footer_key: Color::Yellow,
            footer_text: Color::White,
        }
    }
}

impl Theme {
    // Helper methods for common style combinations

    pub fn header_title_style(&self) -> Style {
        Style::default()
            .fg(self.header_title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn field_label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.field_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.field_label)
        }
    }

    pub fn card_status_style(&self, status: crate::models::CardStatus) -> Style {
        use crate::models::CardStatus;
        Style::default().fg(match status {
            CardStatus::Pending => self.status_pending,
            CardStatus::Approved => self.status_approved,
            CardStatus::Rejected => self.status_rejected,
        })
    }

    pub fn table_selected_style(&self) -> Style {
        Style::default()
            .fg(self.table_selected)
            .bg(self.table_selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn message_success_style(&self) -> Style {
        Style::default()
            .fg(self.message_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message_error_style(&self) -> Style {
        Style::default()
            .fg(self.message_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message_status_style(&self) -> Style {
        Style::default().fg(self.message_status)
    }

    pub fn operation_warning_style(&self) -> Style {
        Style::default()
            .fg(self.operation_warning)
            .add_modifier(Modifier::BOLD)
    }
}
