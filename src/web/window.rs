use std::net::TcpListener;
use std::path::Path;

use crate::mapper::GeoPosition;
use crate::render::{Canvas, Glyph, MapSurface, MarkerColor, RenderError, ShapeId};

use super::server::serve_until_dismissed;

/// Map shown as a local web page. The listening socket is bound when the
/// window opens so an unusable address fails together with the images.
pub struct MapWindow {
    canvas: Canvas,
    listener: TcpListener,
}

impl MapWindow {
    pub fn open(
        width_px: u32,
        height_px: u32,
        background: &Path,
        bind: &str,
    ) -> Result<Self, RenderError> {
        let canvas = Canvas::init(width_px, height_px, background)?;
        let listener = TcpListener::bind(bind).map_err(|source| RenderError::Bind {
            addr: bind.to_string(),
            source,
        })?;
        listener.set_nonblocking(true)?;

        Ok(Self { canvas, listener })
    }
}

impl MapSurface for MapWindow {
    fn register_shape(&mut self, path: &Path) -> Result<ShapeId, RenderError> {
        self.canvas.register_shape(path)
    }

    fn place_marker(&mut self, position: GeoPosition, glyph: Glyph, heading_deg: Option<f64>) {
        self.canvas.place_marker(position, glyph, heading_deg);
    }

    fn place_labeled_dot(
        &mut self,
        position: GeoPosition,
        color: MarkerColor,
        radius_px: u32,
        text: &str,
    ) {
        self.canvas
            .place_labeled_dot(position, color, radius_px, text);
    }

    fn address(&self) -> Option<String> {
        let addr = self.listener.local_addr().ok()?;
        Some(format!("http://{}/", addr))
    }

    fn wait_for_dismissal(self) -> Result<(), RenderError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(serve_until_dismissed(self.listener, self.canvas))?;
        log::info!("Map dismissed");
        Ok(())
    }
}
