use image::ImageReader;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::mapper::GeoPosition;

use super::error::RenderError;
use super::projection::Projection;
use super::types::{Glyph, MapMarker, MarkerColor, ShapeId};

/// An image read from disk and checked to decode.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let to_err = |source: image::ImageError| RenderError::Image {
            path: path.to_path_buf(),
            source,
        };

        let bytes = std::fs::read(path).map_err(|e| to_err(image::ImageError::IoError(e)))?;
        let format = image::guess_format(&bytes).map_err(to_err)?;
        let decoded = ImageReader::with_format(Cursor::new(&bytes), format)
            .decode()
            .map_err(to_err)?;

        Ok(Self {
            path: path.to_path_buf(),
            mime: format.to_mime_type(),
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }
}

/// Globe-sized drawing area: a background picture plus whatever markers have
/// been placed on it.
#[derive(Debug, Clone)]
pub struct Canvas {
    projection: Projection,
    background: ImageAsset,
    shapes: Vec<ImageAsset>,
    markers: Vec<MapMarker>,
}

impl Canvas {
    pub fn init(width_px: u32, height_px: u32, background: &Path) -> Result<Self, RenderError> {
        if width_px == 0 || height_px == 0 {
            return Err(RenderError::EmptyCanvas {
                width: width_px,
                height: height_px,
            });
        }

        let background = ImageAsset::load(background)?;
        log::debug!(
            "canvas {}x{} over {} ({}x{})",
            width_px,
            height_px,
            background.path.display(),
            background.width,
            background.height
        );

        Ok(Self {
            projection: Projection::globe(width_px, height_px),
            background,
            shapes: Vec::new(),
            markers: Vec::new(),
        })
    }

    pub fn register_shape(&mut self, path: &Path) -> Result<ShapeId, RenderError> {
        let asset = ImageAsset::load(path)?;
        self.shapes.push(asset);
        Ok(ShapeId(self.shapes.len() - 1))
    }

    pub fn place_marker(&mut self, position: GeoPosition, glyph: Glyph, heading_deg: Option<f64>) {
        self.markers.push(MapMarker {
            position,
            glyph,
            heading_deg,
            label: None,
            color: None,
        });
    }

    pub fn place_labeled_dot(
        &mut self,
        position: GeoPosition,
        color: MarkerColor,
        radius_px: u32,
        text: &str,
    ) {
        self.markers.push(MapMarker {
            position,
            glyph: Glyph::Dot { radius_px },
            heading_deg: None,
            label: Some(text.to_string()),
            color: Some(color),
        });
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn background(&self) -> &ImageAsset {
        &self.background
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ImageAsset> {
        self.shapes.get(id.0)
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }
}
