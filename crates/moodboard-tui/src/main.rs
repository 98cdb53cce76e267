use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use moodboard_core::{
    settings::{Settings, CONFIG_PATH},
    InteractionController, RngSource,
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
mod effects;
mod ui;
use ui::app::App;

const LOG_FILE: &str = "moodboard.log";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            // The file is left as written; a theme toggle only touches its
            // `theme` key.
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    };

    let catalog = Arc::new(settings.catalog().context("invalid mood catalog")?);
    let store = Arc::new(
        settings
            .quote_store(&catalog)
            .context("failed to load quotes")?,
    );
    let rng = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    tracing::info!(
        moods = catalog.len(),
        quotes = store.len(),
        seeded = settings.seed.is_some(),
        "starting moodboard"
    );

    let board = InteractionController::new(catalog, store, rng);
    let mut app = App::new(&settings, board, PathBuf::from(CONFIG_PATH));

    let mut terminal = init_terminal()?;
    let result = app.run(&mut terminal).await;
    restore_terminal(&mut terminal)?;

    result
}

fn log_path() -> PathBuf {
    ProjectDirs::from("", "", "moodboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE))
}

/// Log to a file; the terminal belongs to the UI.
fn init_tracing() -> Result<()> {
    let path = log_path();
    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let filter =
        EnvFilter::try_from_env("MOODBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
