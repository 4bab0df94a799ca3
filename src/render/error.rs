use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("cannot open display on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("display failed: {0}")]
    Io(#[from] std::io::Error),
}
