use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("Time value is not a finite number: {0}")]
    NonFinite(f64),

    #[error("Duration cannot be negative: {0}")]
    Negative(f64),

    #[error("Timestamp is outside the representable range: {0}")]
    OutOfRange(f64),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid request url: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid origin {0:?}: {1}")]
    InvalidOrigin(String, String),

    #[error("Invalid listen address {0:?}")]
    InvalidListen(String),
}
