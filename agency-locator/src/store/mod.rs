//! Persistent GeoCache store and seed fallback.
//!
//! The GeoCache holds the agency directory as a single durable snapshot.
//! Replacement is whole-of-store; the seed fallback fills an empty store
//! with one representative agency per category.

mod error;
mod geocache;
mod seed;

pub use error::StoreError;
pub use geocache::{GeoCache, GeoCacheConfig};
pub use seed::{seed_agencies, seed_if_empty};
