use thiserror::Error;

/// Failure talking to the movie API.
///
/// Every variant is shown to the user as the same retry-later message; the
/// variant only matters for the log.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    Status { status: u16 },

    #[error("invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Failure fetching or decoding a poster image.
#[derive(Debug, Error)]
pub enum PosterError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("could not decode poster: {0}")]
    Decode(#[from] image::ImageError),
}

/// Failure reading or writing the settings file.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
