//! Conversion from source point features to agency records.

use crate::domain::{Agency, AgencyKind, Coordinates};

use super::types::PoiElement;

/// Fallback strings for absent tags, as shown to end users.
const NO_ADDRESS: &str = "Endereço não informado";
const NO_PHONE: &str = "Telefone não informado";
const NO_EMAIL: &str = "Email não informado";
const NO_POSTCODE: &str = "CEP não informado";
const NO_HOURS: &str = "Horário não informado";

/// Convert one point feature into an agency record.
///
/// Returns `None` for elements without coordinates or without a `name`
/// or `brand` tag; those are unusable in the directory. The id is
/// prefixed with the category so ids stay unique across independently
/// queried categories.
pub fn element_to_agency(kind: AgencyKind, element: &PoiElement) -> Option<Agency> {
    let (lat, lon) = element.position()?;
    let coords = Coordinates::new(lat, lon).ok()?;

    let name = element.tag_any(&["name", "brand"])?.to_string();

    let street_address = match element.tag_any(&["addr:street"]) {
        Some(street) => match element.tag_any(&["addr:housenumber"]) {
            Some(number) => format!("{}, {}", street, number),
            None => street.to_string(),
        },
        None => NO_ADDRESS.to_string(),
    };

    Some(Agency {
        id: Agency::make_id(kind, element.id),
        kind,
        name,
        coords: Some(coords),
        street_address,
        phone: element
            .tag_any(&["phone", "contact:phone"])
            .unwrap_or(NO_PHONE)
            .to_string(),
        email: element
            .tag_any(&["email", "contact:email"])
            .unwrap_or(NO_EMAIL)
            .to_string(),
        postal_code: element
            .tag_any(&["addr:postcode"])
            .unwrap_or(NO_POSTCODE)
            .to_string(),
        website: element
            .tag_any(&["website", "contact:website"])
            .map(str::to_string),
        opening_hours: element
            .tag_any(&["opening_hours"])
            .unwrap_or(NO_HOURS)
            .to_string(),
    })
}
