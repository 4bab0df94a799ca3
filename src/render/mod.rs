mod canvas;
mod error;
mod projection;
mod types;

#[cfg(test)]
mod tests;

pub use canvas::{Canvas, ImageAsset};
pub use error::RenderError;
pub use types::{Glyph, MarkerColor, ShapeId};

use std::path::Path;

use crate::mapper::GeoPosition;

/// Something the orchestrator can draw markers on and then hand to the user.
pub trait MapSurface {
    /// Loads an icon image for later use with [`Glyph::Icon`].
    fn register_shape(&mut self, path: &Path) -> Result<ShapeId, RenderError>;

    fn place_marker(&mut self, position: GeoPosition, glyph: Glyph, heading_deg: Option<f64>);

    fn place_labeled_dot(
        &mut self,
        position: GeoPosition,
        color: MarkerColor,
        radius_px: u32,
        text: &str,
    );

    /// Where the user can find the surface, if it lives somewhere addressable.
    fn address(&self) -> Option<String> {
        None
    }

    /// Blocks until the user dismisses the surface.
    fn wait_for_dismissal(self) -> Result<(), RenderError>;
}
