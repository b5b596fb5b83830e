//! Routing wire and result types.

use serde::{Deserialize, Serialize};

/// OSRM-style routing response.
#[derive(Debug, Deserialize)]
pub struct RoutingResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// One candidate route as returned by the engine.
#[derive(Debug, Deserialize)]
pub struct RouteDto {
    /// Encoded polyline geometry.
    pub geometry: String,
    /// Total distance in meters.
    pub distance: f64,
    /// Total duration in seconds.
    pub duration: f64,
}

/// A driving route between two points.
///
/// Ephemeral query result; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Encoded polyline geometry, as supplied by the engine.
    pub geometry: String,
    /// Total driving distance in kilometers.
    pub distance_km: f64,
    /// Total driving duration in minutes.
    pub duration_min: f64,
}

impl From<RouteDto> for Route {
    fn from(dto: RouteDto) -> Self {
        Self {
            geometry: dto.geometry,
            distance_km: dto.distance / 1000.0,
            duration_min: dto.duration / 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_meters_and_seconds() {
        let dto = RouteDto {
            geometry: "abc123".to_string(),
            distance: 12_500.0,
            duration: 900.0,
        };

        let route = Route::from(dto);
        assert_eq!(route.geometry, "abc123");
        assert!((route.distance_km - 12.5).abs() < 1e-9);
        assert!((route.duration_min - 15.0).abs() < 1e-9);
    }
}
