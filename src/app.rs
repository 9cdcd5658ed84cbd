pub mod catalog;
pub mod detail;
#[cfg(test)]
pub(crate) mod fake;
pub mod models;
pub mod poster;
pub mod prefs;
pub mod request;
pub mod router;
pub mod search;
pub mod tmdb;

use std::sync::{Arc, mpsc};
use std::thread;

use crossterm::event::KeyCode;
use image::DynamicImage;
use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;
use tracing::{error, info};

use crate::app::catalog::MovieListView;
use crate::app::detail::MovieDetailView;
use crate::app::models::{CatalogPage, MovieDetail};
use crate::app::prefs::ThemePreference;
use crate::app::router::Route;
use crate::app::search::SearchEvent;
use crate::app::tmdb::MovieApi;
use crate::config::Config;
use crate::error::{PosterError, Result};

/// Which view a poster download belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterTarget {
    Catalog,
    Detail,
}

/// Completions sent back from worker threads.
pub enum FetchMessage {
    Catalog {
        generation: u64,
        result: Result<CatalogPage>,
    },
    Detail {
        generation: u64,
        result: Result<MovieDetail>,
    },
    Poster {
        target: PosterTarget,
        generation: u64,
        result: std::result::Result<DynamicImage, PosterError>,
    },
}

pub struct App {
    pub route: Route,
    pub theme: ThemePreference,
    pub catalog: MovieListView,
    pub detail: MovieDetailView,
    pub throbber: ThrobberState,
    pub exit: bool,
    pub receiver: mpsc::Receiver<FetchMessage>,
    sender: mpsc::Sender<FetchMessage>,
    api: Arc<dyn MovieApi>,
    config: Config,
    picker: Picker,
}

impl App {
    /// Mounts the shell: the catalog always loads, and `route` decides which
    /// view is shown first.
    pub fn new(
        api: Arc<dyn MovieApi>,
        theme: ThemePreference,
        config: Config,
        picker: Picker,
        route: Route,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();

        let mut app = Self {
            route: Route::Catalog,
            theme,
            catalog: MovieListView::default(),
            detail: MovieDetailView::default(),
            throbber: ThrobberState::default(),
            exit: false,
            receiver,
            sender,
            api,
            config,
            picker,
        };
        app.fetch_catalog();
        app.navigate(route);
        app
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn navigate(&mut self, route: Route) {
        info!(route = %route, "navigate");
        match &route {
            Route::Catalog => self.detail.leave(),
            Route::Movie(id) => self.fetch_detail(id),
        }
        self.route = route;
    }

    pub fn open_selected(&mut self) {
        let card = self
            .catalog
            .selected_card(&self.config.image_base, &self.config.poster_size);
        if let Some(card) = card {
            self.navigate(card.route);
        }
    }

    pub fn go_back(&mut self) {
        self.navigate(Route::Catalog);
    }

    pub fn set_query(&mut self, query: String) {
        info!(query = %query, "search changed");
        self.fetch_catalog();
    }

    /// Re-issues the request behind the current view.
    pub fn retry(&mut self) {
        match self.route.clone() {
            Route::Catalog => self.fetch_catalog(),
            Route::Movie(id) => self.fetch_detail(&id),
        }
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle()
    }

    pub fn tick(&mut self) {
        self.throbber.calc_next();
    }

    fn fetch_catalog(&mut self) {
        let generation = self.catalog.begin();
        self.catalog.poster.clear();
        let query = self.catalog.query().to_string();

        self.spawn(move |api| {
            let result = api.fetch_catalog(&query);
            if let Err(e) = &result {
                error!(query = %query, "Error fetching movies: {e}");
            }
            FetchMessage::Catalog { generation, result }
        });
    }

    fn fetch_detail(&mut self, id: &str) {
        let generation = self.detail.begin(id);
        let id = id.to_string();

        self.spawn(move |api| {
            let result = api.fetch_detail(&id);
            if let Err(e) = &result {
                error!(id = %id, "Error fetching movie: {e}");
            }
            FetchMessage::Detail { generation, result }
        });
    }

    fn fetch_poster(&mut self, target: PosterTarget) {
        let url = match target {
            PosterTarget::Catalog => self.catalog.selected_movie(),
            PosterTarget::Detail => self.detail.movie().map(|m| &m.summary),
        }
        .and_then(|m| m.poster_url(&self.config.image_base, &self.config.poster_size));

        let slot = match target {
            PosterTarget::Catalog => &mut self.catalog.poster,
            PosterTarget::Detail => &mut self.detail.poster,
        };
        let Some((generation, url)) = slot.request(url) else {
            return;
        };

        self.spawn(move |api| FetchMessage::Poster {
            target,
            generation,
            result: api.fetch_poster(&url),
        });
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&dyn MovieApi) -> FetchMessage + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let _ = sender.send(job(api.as_ref()));
        });
    }

    /// Applies every completion that has arrived, without blocking.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Catalog { generation, result } => {
                if self.catalog.finish(generation, result) {
                    self.fetch_poster(PosterTarget::Catalog);
                }
            }
            FetchMessage::Detail { generation, result } => {
                if self.detail.finish(generation, result) {
                    self.fetch_poster(PosterTarget::Detail);
                }
            }
            FetchMessage::Poster {
                target,
                generation,
                result,
            } => {
                let slot = match target {
                    PosterTarget::Catalog => &mut self.catalog.poster,
                    PosterTarget::Detail => &mut self.detail.poster,
                };
                slot.finish(generation, result, &self.picker);
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.route == Route::Catalog && self.catalog.search.is_focused() {
            if let SearchEvent::Changed(query) = self.catalog.search.handle_key(code) {
                self.set_query(query);
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('t') => {
                self.toggle_theme();
            }
            KeyCode::Char('r') => self.retry(),
            _ => match self.route {
                Route::Catalog => self.handle_catalog_key(code),
                Route::Movie(_) => self.handle_detail_key(code),
            },
        }
    }

    fn handle_catalog_key(&mut self, code: KeyCode) {
        let before = self.catalog.selected();
        match code {
            KeyCode::Char('/') | KeyCode::Char('s') => self.catalog.search.focus(),
            KeyCode::Right | KeyCode::Char('l') => self.catalog.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.catalog.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.catalog.select_down(),
            KeyCode::Up | KeyCode::Char('k') => self.catalog.select_up(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
        if self.catalog.selected() != before {
            self.fetch_poster(PosterTarget::Catalog);
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) {
            self.go_back();
        }
    }
}
