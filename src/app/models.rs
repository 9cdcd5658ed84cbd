use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

/// One entry of the catalog, as returned by the discover and search
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: String,
}

/// Full record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default)]
    pub overview: String,
}

/// Result of a catalog request that reached the API.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPage {
    Movies(Vec<MovieSummary>),
    /// The API answered but had nothing to show.
    NoMatches,
}

impl MovieSummary {
    /// Year part of the release date, or "N/A".
    pub fn release_year(&self) -> String {
        match self.release_date() {
            Some(date) => date.chars().take(4).collect(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Release date as "March 31, 1999" when it parses, verbatim otherwise.
    pub fn release_date_label(&self) -> String {
        match self.release_date() {
            Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(|d| d.format("%B %-d, %Y").to_string())
                .unwrap_or_else(|_| date.to_string()),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Rating rounded to one decimal. Zero means unrated on TMDB.
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(vote) if vote.is_finite() && vote != 0.0 => format!("{vote:.1}"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn language_label(&self) -> &str {
        if self.original_language.is_empty() {
            NOT_AVAILABLE
        } else {
            &self.original_language
        }
    }

    /// Full poster URL, or `None` when the movie has no poster.
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        let path = self.poster_path.as_deref()?.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(format!("{}/{}/{}", image_base.trim_end_matches('/'), size, path))
    }

    fn release_date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
pub(crate) fn sample_movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: Some("1999-03-31".to_string()),
        vote_average: Some(8.216),
        original_language: "en".to_string(),
    }
}
