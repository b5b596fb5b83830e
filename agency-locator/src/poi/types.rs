//! Wire types for the point-of-interest data source.

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level Overpass-style response.
#[derive(Debug, Deserialize)]
pub struct PoiResponse {
    #[serde(default)]
    pub elements: Vec<PoiElement>,
}

/// Center coordinates attached to non-node elements when the query asks
/// for `out center`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PoiCenter {
    pub lat: f64,
    pub lon: f64,
}

/// One point feature from the source.
#[derive(Debug, Deserialize)]
pub struct PoiElement {
    pub id: u64,
    /// Present on nodes.
    pub lat: Option<f64>,
    /// Present on nodes.
    pub lon: Option<f64>,
    /// Present on ways/relations queried with `out center`.
    pub center: Option<PoiCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl PoiElement {
    /// Coordinates of the element, from either the node position or the
    /// computed center.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.map(|c| (c.lat, c.lon)),
        }
    }

    /// Look up the first present tag among `keys`.
    pub fn tag_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|k| self.tags.get(*k).map(String::as_str))
    }
}
