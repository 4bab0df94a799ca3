use chrono::{DateTime, Local};
use std::fmt;

/// Someone currently aboard a spacecraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    pub name: String,
    pub craft: String,
}

/// A point on the globe in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a `"lat,lon"` pair such as `"39.768403,-86.158068"`.
    pub fn from_coordinates(coordinates: &str) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return None;
        }
        let latitude: f64 = parts[0].parse().ok()?;
        let longitude: f64 = parts[1].parse().ok()?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self::new(latitude, longitude))
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat={:.2} lon={:.2}", self.latitude, self.longitude)
    }
}

/// Next visible pass of the station over an observer.
#[derive(Debug, Clone, PartialEq)]
pub struct PassPrediction {
    pub rise_time_epoch: i64,
    pub rise_time: DateTime<Local>,
    pub duration_s: Option<u64>,
}

impl PassPrediction {
    /// Rise time in the local zone, laid out like C's `ctime`.
    pub fn display(&self) -> String {
        self.rise_time.format("%a %b %e %H:%M:%S %Y").to_string()
    }
}
