use thiserror::Error;

use crate::api::ApiError;
use crate::mapper::MapError;
use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),
    #[error("bad payload: {0}")]
    Payload(#[from] MapError),
    #[error("graphics: {0}")]
    Render(#[from] RenderError),
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}
