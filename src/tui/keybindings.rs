//! Centralized keybindings
//!
//! This module provides a single source of truth for the key hints shown in
//! the footer.

use crate::tui::app::state::Panel;

/// Navigation command with keybinding and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCommand {
    /// The keybinding string (e.g., "j/k", "Enter")
    pub key: &'static str,
    /// The human-readable label (e.g., "Select", "Submit")
    pub label: &'static str,
}

impl NavigationCommand {
    /// Create a new navigation command
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Commands for the focused panel, followed by the global ones
pub fn panel_commands(panel: Panel) -> Vec<NavigationCommand> {
    let mut commands = match panel {
        Panel::EntryForm => vec![
            NavigationCommand::new("↑/↓", "Field"),
            NavigationCommand::new("←/→", "Status"),
            NavigationCommand::new("Enter", "Add"),
        ],
        Panel::ClientList => vec![
            NavigationCommand::new("j/k", "Select"),
            NavigationCommand::new("d", "Delete"),
            NavigationCommand::new("r", "Refresh"),
        ],
        Panel::Search => vec![NavigationCommand::new("Enter", "Search")],
        Panel::StatusUpdate => vec![
            NavigationCommand::new("↑/↓", "Field"),
            NavigationCommand::new("←/→", "Status"),
            NavigationCommand::new("Enter", "Send"),
        ],
    };
    commands.extend(global_commands());
    commands
}

fn global_commands() -> [NavigationCommand; 2] {
    [
        NavigationCommand::new("Tab", "Next panel"),
        NavigationCommand::new("Esc", "Quit"),
    ]
}

/// Commands while a delete awaits confirmation
pub fn confirmation_commands() -> Vec<NavigationCommand> {
    vec![
        NavigationCommand::new("y", "Confirm delete"),
        NavigationCommand::new("n/Esc", "Cancel"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_ends_with_global_commands() {
        for panel in [
            Panel::EntryForm,
            Panel::ClientList,
            Panel::Search,
            Panel::StatusUpdate,
        ] {
            let commands = panel_commands(panel);
            assert_eq!(commands[commands.len() - 2..], global_commands());
        }
    }

    #[test]
    fn test_list_offers_delete() {
        assert!(
            panel_commands(Panel::ClientList)
                .iter()
                .any(|cmd| cmd.key == "d")
        );
    }
}
