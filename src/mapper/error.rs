use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("unexpected payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("{field} is not a decimal degree value: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
    #[error("expected at least {needed} pass events, got {found}")]
    NotEnoughPasses { needed: usize, found: usize },
    #[error("rise time {0} is out of range")]
    InvalidTimestamp(i64),
}
