use serde::Deserialize;
use strum_macros::Display;

use crate::mapper::GeoPosition;

/// Handle to an icon registered on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeId(pub(crate) usize);

impl ShapeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
    White,
    Black,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Icon(ShapeId),
    Dot { radius_px: u32 },
}

/// A point drawn on the canvas. Markers only ever accumulate; moving a glyph
/// to its target leaves no trail.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: GeoPosition,
    pub glyph: Glyph,
    pub heading_deg: Option<f64>,
    pub label: Option<String>,
    pub color: Option<MarkerColor>,
}
