//! Card status update form rendering

use super::entry_form::{oib_line, status_value};
use super::helpers::{create_themed_block, field_line};
use crate::tui::app::state::{Panel, StatusField, StatusFormState};
use crate::tui::theme::Theme;
use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

/// Render the status update form
pub fn render_status_update(
    f: &mut Frame,
    area: Rect,
    form: &StatusFormState,
    panel_focused: bool,
    theme: &Theme,
) {
    let oib_focused = panel_focused && form.focused == StatusField::Oib;
    let status_focused = panel_focused && form.focused == StatusField::Status;

    let lines = vec![
        oib_line(&form.oib, oib_focused, theme),
        field_line(
            "New Status",
            status_value(form.status, status_focused, theme),
            status_focused,
            theme,
        ),
    ];

    let mut block = create_themed_block(Panel::StatusUpdate.title(), panel_focused, theme);
    if let Some(ref hint) = form.validation_hint {
        block = block.title_bottom(Line::styled(
            format!(" {} ", hint),
            Style::default().fg(theme.validation_hint),
        ));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
