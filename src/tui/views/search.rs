//! Search box and result rendering

use super::helpers::{create_themed_block, field_line, text_value};
use crate::services::messages;
use crate::tui::app::state::{Panel, SearchState};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the search box and, below it, the last result
pub fn render_search(f: &mut Frame, area: Rect, search: &SearchState, focused: bool, theme: &Theme) {
    let mut lines = vec![field_line(
        "OIB",
        text_value(search.query.value(), focused, theme),
        focused,
        theme,
    )];

    if let Some(ref client) = search.result {
        for (label, value) in messages::client_details(client) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", label), Style::default().fg(theme.field_label)),
                Span::styled(value, Style::default().fg(theme.field_value)),
            ]));
        }
    }

    let block = create_themed_block(Panel::Search.title(), focused, theme);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
