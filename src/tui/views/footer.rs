//! Footer view rendering

use crate::tui::app::state::Panel;
use crate::tui::keybindings::{NavigationCommand, confirmation_commands, panel_commands};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render key hints for the focused panel, or for the pending confirmation
pub fn render_footer(f: &mut Frame, area: Rect, panel: Panel, confirming: bool, theme: &Theme) {
    let commands = if confirming {
        confirmation_commands()
    } else {
        panel_commands(panel)
    };

    let footer = Paragraph::new(Line::from(command_spans(&commands, theme)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn command_spans(commands: &[NavigationCommand], theme: &Theme) -> Vec<Span<'static>> {
    let text = Style::default().fg(theme.footer_text);
    let mut spans = Vec::new();
    for (idx, cmd) in commands.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", text));
        }
        spans.push(Span::styled(cmd.key, theme.footer_key_style()));
        spans.push(Span::styled(format!(" {}", cmd.label), text));
    }
    spans
}
