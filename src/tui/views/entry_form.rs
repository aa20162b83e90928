//! New client form rendering

use super::helpers::{create_themed_block, field_line, text_value};
use crate::tui::app::state::{EntryField, EntryFormState, Panel};
use crate::tui::input::TextInput;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the new client form
///
/// A refused submit shows its hint on the bottom border.
pub fn render_entry_form(
    f: &mut Frame,
    area: Rect,
    form: &EntryFormState,
    panel_focused: bool,
    theme: &Theme,
) {
    let is_focused = |field: EntryField| panel_focused && form.focused == field;

    let lines = vec![
        field_line(
            "First Name",
            text_value(form.first_name.value(), is_focused(EntryField::FirstName), theme),
            is_focused(EntryField::FirstName),
            theme,
        ),
        field_line(
            "Last Name",
            text_value(form.last_name.value(), is_focused(EntryField::LastName), theme),
            is_focused(EntryField::LastName),
            theme,
        ),
        oib_line(&form.oib, is_focused(EntryField::Oib), theme),
        field_line(
            "Card Status",
            status_value(form.card_status, is_focused(EntryField::CardStatus), theme),
            is_focused(EntryField::CardStatus),
            theme,
        ),
    ];

    let mut block = create_themed_block(Panel::EntryForm.title(), panel_focused, theme);
    if let Some(ref hint) = form.validation_hint {
        block = block.title_bottom(Line::styled(
            format!(" {} ", hint),
            Style::default().fg(theme.validation_hint),
        ));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// OIB field with its fill counter
pub(super) fn oib_line(oib: &TextInput, focused: bool, theme: &Theme) -> Line<'static> {
    let mut line = field_line("OIB", text_value(oib.value(), focused, theme), focused, theme);
    line.spans.push(Span::styled(
        format!("  ({}/{})", oib.len(), oib.max_chars()),
        Style::default().fg(theme.text_secondary),
    ));
    line
}

/// Status selector, with arrows when it has focus
pub(super) fn status_value(
    status: crate::models::CardStatus,
    focused: bool,
    theme: &Theme,
) -> Span<'static> {
    let text = if focused {
        format!("< {} >", status)
    } else {
        status.to_string()
    };
    Span::styled(text, theme.card_status_style(status))
}
