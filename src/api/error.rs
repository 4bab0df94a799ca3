use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status} from {url}")]
    Http { status: StatusCode, url: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
