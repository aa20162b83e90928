//! Message area rendering

use super::helpers::create_themed_block;
use crate::tui::app::state::MessageState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the success, error and status update messages, one line each
pub fn render_messages(f: &mut Frame, area: Rect, messages: &MessageState, theme: &Theme) {
    let mut lines = Vec::new();
    if let Some(ref msg) = messages.response_message {
        lines.push(Line::from(Span::styled(
            msg.clone(),
            theme.message_success_style(),
        )));
    }
    if let Some(ref msg) = messages.error_message {
        lines.push(Line::from(Span::styled(
            msg.clone(),
            theme.message_error_style(),
        )));
    }
    if let Some(ref msg) = messages.status_update_message {
        lines.push(Line::from(Span::styled(
            msg.clone(),
            theme.message_status_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(create_themed_block("Messages", false, theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
