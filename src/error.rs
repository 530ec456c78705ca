// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a transport that does not speak HTTP.
    #[error("{0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
