//! Client list rendering

use super::helpers::create_themed_block;
use crate::models::ClientRecord;
use crate::services::messages;
use crate::tui::app::state::Panel;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

/// Render the cached client list with the selected row highlighted
pub fn render_client_list(
    f: &mut Frame,
    area: Rect,
    clients: &[ClientRecord],
    selected_index: usize,
    focused: bool,
    theme: &Theme,
) {
    let title = format!("{} ({})", Panel::ClientList.title(), clients.len());
    let block = create_themed_block(&title, focused, theme);

    if clients.is_empty() {
        let paragraph = Paragraph::new(messages::NO_CLIENTS)
            .style(Style::default().fg(theme.text_secondary))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = clients
        .iter()
        .map(|client| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "{} {} - OIB: {} - Status: ",
                        client.first_name, client.last_name, client.oib
                    ),
                    Style::default().fg(theme.table_normal),
                ),
                Span::styled(
                    client.card_status.to_string(),
                    theme.card_status_style(client.card_status),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(selected_index));
    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            theme.table_selected_style()
        } else {
            Style::default().bg(theme.table_selected_bg)
        });
    f.render_stateful_widget(list, area, &mut state);
}
