//! Headless client commands
//!
//! The same five actions as the TUI, one per invocation, reporting with the
//! same messages.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::io::{BufRead, Write};

use crate::models::{CardStatus, NewClientForm, StatusUpdateForm};
use crate::services::{ClientService, messages};

/// Client record subcommands
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// List all clients
    List,
    /// Show a single client by OIB
    Get {
        /// OIB of the client
        oib: String,
    },
    /// Add a new client
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        oib: String,
        /// Initial card status
        #[arg(long, default_value_t = CardStatus::Pending)]
        status: CardStatus,
    },
    /// Delete a client by OIB
    Delete {
        /// OIB of the client
        oib: String,
        /// Skip the confirmation question
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Submit a card status update through the messaging endpoint
    SetStatus {
        /// OIB of the client
        oib: String,
        /// New card status (PENDING, APPROVED or REJECTED)
        status: CardStatus,
    },
}

/// Run a client command, reading confirmations from `input`
///
/// Returns whether the action succeeded; a declined delete counts as success.
pub async fn handle_client_command(
    cmd: ClientCommand,
    service: &ClientService,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let succeeded = match cmd {
        ClientCommand::List => match service.list_clients().await {
            Ok(clients) if clients.is_empty() => {
                writeln!(out, "{}", messages::NO_CLIENTS)?;
                true
            }
            Ok(clients) => {
                for client in &clients {
                    writeln!(out, "{}", client)?;
                }
                true
            }
            Err(e) => {
                writeln!(out, "Error fetching clients: {}", e)?;
                false
            }
        },
        ClientCommand::Get { oib } => match service.get_client(&oib).await {
            Ok(client) => {
                for (label, value) in messages::client_details(&client) {
                    writeln!(out, "{}: {}", label, value)?;
                }
                true
            }
            Err(_) => {
                writeln!(out, "{}", messages::CLIENT_NOT_FOUND)?;
                false
            }
        },
        ClientCommand::Add {
            first_name,
            last_name,
            oib,
            status,
        } => {
            let form = NewClientForm {
                first_name,
                last_name,
                oib,
                card_status: status,
            };
            match form.to_record() {
                Err(hint) => {
                    writeln!(out, "{}", hint)?;
                    false
                }
                Ok(record) => match service.create_client(&record).await {
                    Ok(created) => {
                        writeln!(out, "{}", messages::client_added(&created))?;
                        true
                    }
                    Err(e) => {
                        writeln!(out, "{}", messages::submit_error(&e))?;
                        false
                    }
                },
            }
        }
        ClientCommand::Delete { oib, yes } => {
            if !yes && !confirm(&messages::delete_confirmation(&oib), input, out)? {
                writeln!(out, "{}", messages::DELETE_CANCELLED)?;
                return Ok(true);
            }
            match service.delete_client(&oib).await {
                Ok(()) => {
                    writeln!(out, "{}", messages::client_deleted(&oib))?;
                    true
                }
                Err(_) => {
                    writeln!(out, "{}", messages::DELETE_FAILED)?;
                    false
                }
            }
        }
        ClientCommand::SetStatus { oib, status } => {
            let form = StatusUpdateForm { oib, status };
            match form.to_request() {
                Err(hint) => {
                    writeln!(out, "{}", hint)?;
                    false
                }
                Ok(request) => match service.update_card_status(&request).await {
                    Ok(message) => {
                        writeln!(out, "{}", message)?;
                        true
                    }
                    Err(_) => {
                        writeln!(out, "{}", messages::STATUS_UPDATE_FAILED)?;
                        false
                    }
                },
            }
        }
    };

    Ok(succeeded)
}

/// Ask a yes/no question; anything but "y" or "yes" declines
pub fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "{} [y/N] ", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_accepts_yes() {
        let mut out = Vec::new();
        assert!(confirm("Delete?", &mut "y\n".as_bytes(), &mut out).unwrap());
        assert!(confirm("Delete?", &mut "YES\n".as_bytes(), &mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Delete? [y/N] Delete? [y/N] "
        );
    }

    #[test]
    fn test_confirm_declines_by_default() {
        let mut out = Vec::new();
        assert!(!confirm("Delete?", &mut "\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Delete?", &mut "no\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Delete?", &mut "".as_bytes(), &mut out).unwrap());
    }
}
