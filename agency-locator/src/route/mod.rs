//! Driving-route service client.
//!
//! Requests one driving route from an OSRM-style engine. The engine's
//! `(lon, lat)` waypoint order is confined to URL construction inside the
//! client; everything callers touch uses the crate-wide `Coordinates`
//! type.

mod client;
mod error;
mod types;

pub use client::{RouteClient, RouteClientConfig};
pub use error::RouteError;
pub use types::{Route, RouteDto, RoutingResponse};
