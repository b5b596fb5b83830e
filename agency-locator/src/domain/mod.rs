//! Domain types for the agency locator.
//!
//! This module contains the core domain model types that represent
//! validated geographic and directory data. All types enforce their
//! invariants at construction time, so code that receives these types
//! can trust their validity.

mod agency;
mod cep;
mod coords;

pub use agency::{Agency, AgencyKind, RankedAgency};
pub use cep::{Cep, InvalidCep};
pub use coords::{Coordinates, InvalidCoordinates};
