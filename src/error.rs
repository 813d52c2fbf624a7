use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Resource not found: {url}")]
    NotFound { url: String, body: String },

    #[error("GitHub API request to {url} failed with status {status}: {body}")]
    HttpError { status: u16, url: String, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Base64 decoding error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("README is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error(
        "No GitHub analysis found at {}. Run \"portfolio-analyzer analyze <username>\" first",
        .0.display()
    )]
    MissingSnapshot(PathBuf),
}

impl PortfolioError {
    /// HTTP status carried by the error, if it came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            PortfolioError::NotFound { .. } => Some(404),
            PortfolioError::HttpError { status, .. } => Some(*status),
            PortfolioError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
