use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_POSTER_SIZE: &str = "w500";

const API_KEY_VARS: [&str; 2] = ["TMDB_API_KEY", "VITE_TMDB_API_KEY"];

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bearer credential for the movie API. `None` means every request will
    /// be rejected by the API.
    pub api_key: Option<String>,
    pub api_base: String,
    pub image_base: String,
    pub poster_size: String,
    /// Directory holding `settings.json`.
    pub config_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            poster_size: DEFAULT_POSTER_SIZE.to_string(),
            config_dir: default_config_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = API_KEY_VARS.iter().find_map(|key| get(key));
        if api_key.is_none() {
            warn!("TMDB_API_KEY is not set, requests to the movie API will be rejected");
        }

        let defaults = Self::default();
        Self {
            api_key,
            api_base: get("TMDB_API_BASE").unwrap_or(defaults.api_base),
            image_base: get("TMDB_IMAGE_BASE").unwrap_or(defaults.image_base),
            poster_size: get("TMDB_POSTER_SIZE").unwrap_or(defaults.poster_size),
            config_dir: get("FILMLAND_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_dir),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join("filmland")
}

/// Where the log file goes. The terminal belongs to the UI, so logs can't.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("filmland")
}
