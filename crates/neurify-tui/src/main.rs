use std::fs::File;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use tui::EventHandler;

const LOG_FILE: &str = "neurify.log";

/// Log to a file when RUST_LOG is set. The terminal is owned by the TUI,
/// so nothing may write to stdout or stderr while it runs.
fn init_tracing() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut tui::Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        // Deliver any scheduled reply before drawing so the transcript is current.
        app.poll_reply().await;

        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => break,
        }
    }

    app.abort_reply();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let mut app = App::new();
    let mut events = EventHandler::new();

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;

    result
}
