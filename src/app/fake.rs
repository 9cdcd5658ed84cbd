//! Canned movie API and helpers shared by the view and render tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use image::DynamicImage;
use ratatui_image::picker::Picker;

use crate::app::App;
use crate::app::models::{CatalogPage, MovieDetail, MovieSummary, sample_movie};
use crate::app::prefs::{MemoryStore, ThemePreference};
use crate::app::router::Route;
use crate::app::tmdb::MovieApi;
use crate::config::Config;
use crate::error::{NetworkError, PosterError, Result};

#[derive(Clone)]
pub(crate) enum Reply {
    Page(CatalogPage),
    Status(u16),
}

/// Canned API. Records every call so tests can count requests.
#[derive(Default)]
pub(crate) struct FakeApi {
    catalog: HashMap<String, Reply>,
    details: HashMap<String, MovieDetail>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn with_catalog(mut self, query: &str, reply: Reply) -> Self {
        self.catalog.insert(query.to_string(), reply);
        self
    }

    pub(crate) fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.summary.id.to_string(), detail);
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MovieApi for FakeApi {
    fn fetch_catalog(&self, query: &str) -> Result<CatalogPage> {
        self.record(format!("catalog:{query}"));
        match self.catalog.get(query) {
            Some(Reply::Page(page)) => Ok(page.clone()),
            Some(Reply::Status(status)) => Err(NetworkError::Status { status: *status }),
            None => Ok(CatalogPage::NoMatches),
        }
    }

    fn fetch_detail(&self, id: &str) -> Result<MovieDetail> {
        self.record(format!("detail:{id}"));
        self.details
            .get(id)
            .cloned()
            .ok_or(NetworkError::Status { status: 404 })
    }

    fn fetch_poster(&self, url: &str) -> std::result::Result<DynamicImage, PosterError> {
        self.record(format!("poster:{url}"));
        Err(NetworkError::Status { status: 404 }.into())
    }
}

pub(crate) fn movies(ids: &[u64]) -> Vec<MovieSummary> {
    ids.iter().map(|id| sample_movie(*id, &format!("Movie {id}"))).collect()
}

pub(crate) fn answer() -> MovieDetail {
    MovieDetail {
        summary: MovieSummary {
            id: 42,
            title: "The Answer".into(),
            poster_path: None,
            release_date: Some("1979-10-12".into()),
            vote_average: Some(7.84),
            original_language: "en".into(),
        },
        overview: "Forty-two.".into(),
    }
}

pub(crate) fn app_with(api: FakeApi, route: Route) -> (App, Arc<FakeApi>) {
    let api = Arc::new(api);
    let theme = ThemePreference::load(Box::new(MemoryStore::default()));
    let app = App::new(
        api.clone(),
        theme,
        Config::default(),
        Picker::halfblocks(),
        route,
    );
    (app, api)
}

/// Blocks until `count` completions have been applied.
pub(crate) fn pump(app: &mut App, count: usize) {
    for _ in 0..count {
        let message = app
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("worker did not answer");
        app.handle_message(message);
    }
}
