//! Placeholder View demo
//!
//! Binary entry point: shows the placeholder full-screen and lets the user
//! switch styles from the keyboard.
//!
//! Usage: `placeholder-view [ART_FILE]`. Set `PLACEHOLDER_VIEW_LOG` to a file
//! path to write `tracing` output there (filtered by `RUST_LOG`).

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use placeholder_view::app::App;
use placeholder_view::model::Image;

/// Environment variable naming the log file
const LOG_ENV: &str = "PLACEHOLDER_VIEW_LOG";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let image = std::env::args().nth(1).map(Image::load).transpose()?;

    let terminal = ratatui::init();
    let result = run(terminal, image);
    ratatui::restore();
    result
}

/// Log to a file when requested; stdout belongs to the terminal UI.
fn init_logging() -> color_eyre::Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("placeholder_view=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, image: Option<Image>) -> color_eyre::Result<()> {
    let mut app = App::new(image);
    tracing::info!("placeholder demo started");

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout; when no event arrives within the timeout the
/// spinner advances one frame.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.on_tick();
    }
    Ok(())
}
