use crate::mapper::GeoPosition;

/// World-coordinate window of the canvas, lower-left to upper-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl WorldBounds {
    /// Whole globe: x is longitude, y is latitude.
    pub const GLOBE: WorldBounds = WorldBounds {
        llx: -180.0,
        lly: -90.0,
        urx: 180.0,
        ury: 90.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Linear world-to-pixel transform. Pixel y grows downwards, so the world's
/// upper-left corner lands on pixel (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width_px: u32,
    height_px: u32,
    bounds: WorldBounds,
}

impl Projection {
    pub fn new(width_px: u32, height_px: u32, bounds: WorldBounds) -> Self {
        Self {
            width_px,
            height_px,
            bounds,
        }
    }

    pub fn globe(width_px: u32, height_px: u32) -> Self {
        Self::new(width_px, height_px, WorldBounds::GLOBE)
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn world_to_pixel(&self, x: f64, y: f64) -> PixelPoint {
        let b = &self.bounds;
        let sx = f64::from(self.width_px) / (b.urx - b.llx);
        let sy = f64::from(self.height_px) / (b.ury - b.lly);
        PixelPoint {
            x: (x - b.llx) * sx,
            y: (b.ury - y) * sy,
        }
    }

    /// Places a position with longitude on x and latitude on y.
    pub fn project(&self, position: GeoPosition) -> PixelPoint {
        self.world_to_pixel(position.longitude, position.latitude)
    }
}
