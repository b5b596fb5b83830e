//! Shipping-agency proximity locator.
//!
//! A local directory of carrier drop-off/pickup points (post offices,
//! courier branches, freight carriers, logistics hubs) built from a
//! point-of-interest source, persisted as a GeoCache snapshot, queried
//! by proximity to a postal code, and able to fetch a driving route to a
//! chosen point.
//!
//! The resolution chain behind [`locator::Locator::find_nearby`]:
//! validate the CEP locally, resolve it to a structured address, geocode
//! that address to an origin, then rank every cached agency by haversine
//! distance and keep those inside the radius.

pub mod domain;
pub mod geocode;
pub mod import;
pub mod locator;
pub mod poi;
pub mod route;
pub mod store;
pub mod viacep;

pub use domain::{Agency, AgencyKind, Cep, Coordinates, RankedAgency};
pub use locator::{Locator, LocatorError};
pub use route::Route;
