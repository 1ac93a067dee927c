//! use-state-form - a controlled form component in the terminal
//!
//! Two inputs bound to one state value, a submit handler that logs both
//! values, and lifecycle hooks whose output shows in an in-app console.

mod app;
mod config;
mod platform;
mod runtime;
mod state;
mod ui;
mod widget;

use anyhow::Result;
use app::App;
use config::FormConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "use-state-form.log";

/// Open the log file in the data directory, if there is one
fn open_log_file() -> Option<File> {
    let dir = FormConfig::data_dir()?;
    fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "use_state_form=info".into());

    // The terminal is in raw mode while the UI runs, so log to a file
    match open_log_file() {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> Result<()> {
    init_logging();

    let session = uuid::Uuid::new_v4();
    let span = tracing::info_span!("session", id = %session);
    let _guard = span.enter();

    let (config, config_error) = load_config();
    let mut app = App::new(config)?;
    if let Some(message) = config_error {
        app.state.push_error(message);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("ui loop failed: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!(
        submissions = app.form.component().submissions(),
        "session finished"
    );
    Ok(())
}

/// Load the config file, falling back to defaults with a message for the UI
fn load_config() -> (FormConfig, Option<String>) {
    match FormConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("config not loaded: {err:#}");
            (
                FormConfig::default(),
                Some(format!("Config not loaded, using defaults: {err:#}")),
            )
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Queued state updates land before the next paint
        app.commit()?;

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit()?;
                    } else {
                        app.handle_key(key)?;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(_width, _height) => app.handle_resize()?,
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
