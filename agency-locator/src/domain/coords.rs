//! Geographic coordinate value type.
//!
//! One `(lat, lon)` axis order is used throughout the crate. The routing
//! engine's `(lon, lat)` waypoint order is produced only inside the route
//! client at the outward call, so a transposition can never leak in here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned for out-of-range WGS84 coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates ({lat}, {lon}): {reason}")]
pub struct InvalidCoordinates {
    lat: f64,
    lon: f64,
    reason: &'static str,
}

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create a validated coordinate pair.
    ///
    /// Latitude must be within ±90°, longitude within ±180°, both finite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinates {
                lat,
                lon,
                reason: "must be finite",
            });
        }
        if lat.abs() > 90.0 {
            return Err(InvalidCoordinates {
                lat,
                lon,
                reason: "latitude out of range",
            });
        }
        if lon.abs() > 180.0 {
            return Err(InvalidCoordinates {
                lat,
                lon,
                reason: "longitude out of range",
            });
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
