//! Geocoding service client.
//!
//! Turns a free-text address into at most one best-match coordinate pair.

mod client;
mod error;

pub use client::{GeocoderClient, GeocoderConfig};
pub use error::GeocodeError;
