//! Header view rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header: title, API base URL, record count, freshness and
/// a busy marker while requests are in flight
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    client_count: usize,
    last_refreshed: Option<chrono::DateTime<chrono::Local>>,
    busy: bool,
    theme: &Theme,
) {
    let label = Style::default().fg(theme.header_label);
    let value = Style::default().fg(theme.header_value);

    let refreshed = last_refreshed
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let mut spans = vec![
        Span::styled("Client Cards", theme.header_title_style()),
        Span::styled("  API: ", label),
        Span::styled(base_url.to_string(), value),
        Span::styled("  Clients: ", label),
        Span::styled(client_count.to_string(), value),
        Span::styled("  Refreshed: ", label),
        Span::styled(refreshed, value),
    ];
    if busy {
        spans.push(Span::styled(
            "  [working...]",
            Style::default().fg(theme.header_busy),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false)),
    );
    f.render_widget(paragraph, area);
}
