mod app;
mod config;
mod error;
mod ui;

use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::prelude::{Backend, CrosstermBackend};
use ratatui_image::picker::Picker;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::app::prefs::{FileStore, ThemePreference};
use crate::app::router::Route;
use crate::app::tmdb::TmdbClient;
use crate::config::Config;

/// Logs go to a file because the terminal is taken by the UI.
fn init_tracing() {
    let dir = config::log_dir();
    let file = match fs::create_dir_all(&dir).and_then(|_| File::create(dir.join("filmland.log"))) {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}

/// First argument is an optional start path such as `/movie/603`.
fn start_route() -> Route {
    match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            warn!(path = %path, "unknown start path, opening the catalog");
            Route::Catalog
        }),
        None => Route::Catalog,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => info!("No .env file loaded ({}) - relying on environment", e),
    }

    let config = Config::from_env();
    let api = Arc::new(TmdbClient::new(&config)?);
    let theme = ThemePreference::load(Box::new(FileStore::new(config.settings_path())));
    let route = start_route();

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Must run after entering the alternate screen; it queries the terminal
    let picker = Picker::from_query_stdio().unwrap_or_else(|e| {
        warn!("terminal graphics query failed, using half blocks: {e}");
        Picker::halfblocks()
    });

    // create app and run it
    let mut app = App::new(api, theme, config, picker, route);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("application error: {e}");
    }
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>>
where
    B::Error: 'static,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Check for messages from the worker threads
        app.drain_messages();

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                app.handle_key(key.code);
            }
        } else {
            app.tick();
        }

        if app.exit {
            info!("exiting");
            return Ok(());
        }
    }
}
