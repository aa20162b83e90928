//! Confirmation dialog rendering

use crate::services::messages;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the delete confirmation dialog over `area`
pub fn render_confirmation(f: &mut Frame, area: Rect, oib: &str, theme: &Theme) {
    let confirm = Style::default()
        .fg(theme.operation_confirm)
        .add_modifier(Modifier::BOLD);
    let cancel = Style::default()
        .fg(theme.operation_cancel)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("⚠ ", theme.operation_warning_style()),
            Span::styled("CONFIRMATION REQUIRED", theme.operation_warning_style()),
        ]),
        Line::from(""),
        Line::from(messages::delete_confirmation(oib)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("y", confirm),
            Span::raw(" or "),
            Span::styled("Y", confirm),
            Span::raw(" to confirm"),
        ]),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("n", cancel),
            Span::raw(", "),
            Span::styled("N", cancel),
            Span::raw(", or "),
            Span::styled("Esc", cancel),
            Span::raw(" to cancel"),
        ]),
    ];

    let block = Block::default()
        .title("Delete Client")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.operation_warning));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
