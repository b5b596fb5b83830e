//! Agency records: the carrier drop-off/pickup points in the directory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinates;

/// Category of a carrier point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgencyKind {
    /// Post offices (Correios branches and franchises)
    PostalOffice,
    /// Regional courier branches
    RegionalCourier,
    /// Freight/heavy cargo carriers
    FreightCarrier,
    /// Logistics hubs and distribution centers
    LogisticsHub,
}

impl AgencyKind {
    /// All categories, in the order the importer queries them.
    pub const ALL: [AgencyKind; 4] = [
        AgencyKind::PostalOffice,
        AgencyKind::RegionalCourier,
        AgencyKind::FreightCarrier,
        AgencyKind::LogisticsHub,
    ];

    /// Stable identifier prefix. Combined with the source element id this
    /// keeps agency ids unique across independently queried categories.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            AgencyKind::PostalOffice => "postal-office",
            AgencyKind::RegionalCourier => "regional-courier",
            AgencyKind::FreightCarrier => "freight-carrier",
            AgencyKind::LogisticsHub => "logistics-hub",
        }
    }

    /// OSM-style tag filter used by the point-of-interest query for
    /// this category.
    pub fn tag_filter(&self) -> (&'static str, &'static str) {
        match self {
            AgencyKind::PostalOffice => ("amenity", "post_office"),
            AgencyKind::RegionalCourier => ("office", "courier"),
            AgencyKind::FreightCarrier => ("office", "logistics"),
            AgencyKind::LogisticsHub => ("industrial", "warehouse"),
        }
    }
}

impl fmt::Display for AgencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_prefix())
    }
}

/// A persisted carrier point record.
///
/// Created in bulk by the importer (whole-store replace) or by the seed
/// fallback; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    /// Unique id: `{kind prefix}_{source element id}`.
    pub id: String,
    pub kind: AgencyKind,
    pub name: String,
    /// Coordinates, when the source provided them.
    pub coords: Option<Coordinates>,
    pub street_address: String,
    pub phone: String,
    pub email: String,
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Free-text opening hours as supplied by the source.
    pub opening_hours: String,
}

impl Agency {
    /// Build the globally unique id for a source element of a category.
    pub fn make_id(kind: AgencyKind, source_id: impl fmt::Display) -> String {
        format!("{}_{}", kind.id_prefix(), source_id)
    }
}

/// An agency together with its computed distance from a query origin.
///
/// Produced only as a `find_nearby` result; never persisted. Keeping the
/// distance off the stored record makes the store/query split a type-level
/// guarantee rather than a convention.
#[derive(Debug, Clone, Serialize)]
pub struct RankedAgency {
    #[serde(flatten)]
    pub agency: Agency,
    pub distance_km: f64,
}
