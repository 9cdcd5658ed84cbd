use image::DynamicImage;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::app::models::{CatalogPage, MovieDetail, MovieSummary};
use crate::config::Config;
use crate::error::{NetworkError, PosterError, Result};

/// Read-only access to the movie API. The UI only talks to this trait so
/// tests can swap in a fake.
pub trait MovieApi: Send + Sync {
    /// Popular movies for an empty query, search results otherwise.
    fn fetch_catalog(&self, query: &str) -> Result<CatalogPage>;

    fn fetch_detail(&self, id: &str) -> Result<MovieDetail>;

    fn fetch_poster(&self, url: &str) -> std::result::Result<DynamicImage, PosterError>;
}

pub struct TmdbClient {
    http: Client,
    api_base: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            match HeaderValue::from_str(&format!("Bearer {key}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("TMDB_API_KEY is not a valid header value, sending no credential: {e}"),
            }
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self.http.get(url).send()?;
        check_status(response.status())?;
        Ok(response.text()?)
    }
}

impl MovieApi for TmdbClient {
    fn fetch_catalog(&self, query: &str) -> Result<CatalogPage> {
        let body = self.get_text(&catalog_url(&self.api_base, query))?;
        parse_catalog(&body)
    }

    fn fetch_detail(&self, id: &str) -> Result<MovieDetail> {
        let body = self.get_text(&detail_url(&self.api_base, id))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_poster(&self, url: &str) -> std::result::Result<DynamicImage, PosterError> {
        debug!(url, "GET poster");
        let response = self.http.get(url).send().map_err(NetworkError::from)?;
        check_status(response.status())?;
        let bytes = response.bytes().map_err(NetworkError::from)?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Discover endpoint for an empty query, search endpoint otherwise.
pub fn catalog_url(api_base: &str, query: &str) -> String {
    let base = api_base.trim_end_matches('/');
    if query.is_empty() {
        format!("{base}/discover/movie?sort_by=popularity.desc")
    } else {
        format!("{base}/search/movie?query={}", urlencoding::encode(query))
    }
}

pub fn detail_url(api_base: &str, id: &str) -> String {
    format!(
        "{}/movie/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

pub fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(NetworkError::Status {
            status: status.as_u16(),
        })
    }
}

#[derive(Deserialize)]
struct CatalogPayload {
    #[serde(default)]
    results: Option<Vec<MovieSummary>>,
    #[serde(default)]
    response: Option<serde_json::Value>,
    #[serde(default)]
    success: Option<bool>,
}

impl CatalogPayload {
    /// The payload says "nothing here" even though the request succeeded.
    fn signals_failure(&self) -> bool {
        let response_false = match &self.response {
            Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("false"),
            Some(serde_json::Value::Bool(b)) => !b,
            _ => false,
        };
        response_false || self.success == Some(false)
    }
}

pub fn parse_catalog(body: &str) -> Result<CatalogPage> {
    let payload: CatalogPayload = serde_json::from_str(body)?;
    if payload.signals_failure() {
        return Ok(CatalogPage::NoMatches);
    }

    match payload.results {
        Some(movies) if !movies.is_empty() => Ok(CatalogPage::Movies(movies)),
        _ => Ok(CatalogPage::NoMatches),
    }
}
