//! TUI module
//!
//! Provides the terminal user interface for clientcards.
//! Built with ratatui; requests run on spawned tasks while the loop keeps
//! drawing and reading keys.

pub mod app;
pub mod constants;
pub mod input;
pub mod keybindings;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use crate::services::ClientService;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Run the TUI application
///
/// The terminal is restored even when the loop fails.
pub async fn run_tui(mut app: App, service: ClientService) -> Result<()> {
    tracing::debug!("Initializing TUI");

    let enable_mouse = app.config().ui.enable_mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Conditionally enable mouse capture based on config
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!("TUI initialized, entering main loop");
    let result = run_loop(&mut terminal, &mut app, &service).await;

    tracing::debug!("TUI shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    // Only disable mouse if it was enabled
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: &ClientService,
) -> Result<()> {
    loop {
        for request in app.take_requests() {
            let service = service.clone();
            tokio::spawn(async move { service.execute(request).await });
        }

        app.poll_responses();
        terminal.draw(|f| app.render(f))?;

        // Handle input events (non-blocking)
        if event::poll(Duration::from_millis(constants::EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == Some(true) {
                    break;
                }
            }
        }
    }

    Ok(())
}
