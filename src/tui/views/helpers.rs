//! Common helper functions for view rendering
//!
//! This module provides reusable functions to reduce duplication across views.

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Create a block with title and borders using theme
///
/// Focused panels get the highlighted border.
pub fn create_themed_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
}

/// A `label: value` form line, marked when focused
pub fn field_line<'a>(label: &str, value: Span<'a>, focused: bool, theme: &Theme) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker, theme.field_label_style(focused)),
        Span::styled(
            format!("{:<13}", format!("{}:", label)),
            theme.field_label_style(focused),
        ),
        value,
    ])
}

/// Text field value with a cursor when focused
pub fn text_value(value: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    Span::styled(text, Style::default().fg(theme.field_value))
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Render the notice shown when the terminal is too small
pub fn render_size_notice(
    f: &mut Frame,
    area: Rect,
    min_width: u16,
    min_height: u16,
    theme: &Theme,
) {
    let text = vec![
        Line::from(format!(
            "Terminal too small: {}x{} (need at least {}x{})",
            area.width, area.height, min_width, min_height
        )),
        Line::from("Resize the window or press Esc to quit."),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, centered_rect(area.width, 2, area));
}
