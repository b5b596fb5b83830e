//! Point-of-interest data source client.
//!
//! Queries an Overpass-style API for carrier points, one country-scoped
//! request per category, and maps the returned point features to agency
//! records. Tag absence is handled with explicit user-facing fallback
//! strings; elements without coordinates or a name/brand are dropped.

mod client;
mod convert;
mod error;
mod types;

pub use client::{PoiClient, PoiClientConfig};
pub use convert::element_to_agency;
pub use error::PoiError;
pub use types::{PoiCenter, PoiElement, PoiResponse};
