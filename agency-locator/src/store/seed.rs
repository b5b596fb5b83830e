//! Seed fallback agencies.
//!
//! A small fixed directory, one representative agency per category, used
//! only when the cache is empty and no import has succeeded. Guarantees
//! the resolver always has at least one candidate per category, even on a
//! first run with no network access.

use tracing::{info, warn};

use crate::domain::{Agency, AgencyKind, Coordinates};

use super::geocache::GeoCache;

/// The built-in seed directory: São Paulo-area representatives.
pub fn seed_agencies() -> Vec<Agency> {
    vec![
        Agency {
            id: Agency::make_id(AgencyKind::PostalOffice, "seed"),
            kind: AgencyKind::PostalOffice,
            name: "Correios - Agência Central São Paulo".to_string(),
            coords: Some(Coordinates::new(-23.5415, -46.6350).unwrap()),
            street_address: "Praça do Correio, 2 - Centro".to_string(),
            phone: "(11) 3003-0100".to_string(),
            email: "atendimento@correios.com.br".to_string(),
            postal_code: "01010-010".to_string(),
            website: Some("https://www.correios.com.br".to_string()),
            opening_hours: "Seg-Sex 09:00-18:00, Sáb 09:00-13:00".to_string(),
        },
        Agency {
            id: Agency::make_id(AgencyKind::RegionalCourier, "seed"),
            kind: AgencyKind::RegionalCourier,
            name: "Jadlog - Unidade Vila Olímpia".to_string(),
            coords: Some(Coordinates::new(-23.5955, -46.6859).unwrap()),
            street_address: "Av. das Nações Unidas, 11541".to_string(),
            phone: "(11) 3563-2000".to_string(),
            email: "contato@jadlog.com.br".to_string(),
            postal_code: "04578-000".to_string(),
            website: Some("https://www.jadlog.com.br".to_string()),
            opening_hours: "Seg-Sex 08:00-18:00".to_string(),
        },
        Agency {
            id: Agency::make_id(AgencyKind::FreightCarrier, "seed"),
            kind: AgencyKind::FreightCarrier,
            name: "Braspress - Filial São Paulo".to_string(),
            coords: Some(Coordinates::new(-23.5201, -46.5876).unwrap()),
            street_address: "Rua Coronel Marques, 1500 - Tatuapé".to_string(),
            phone: "(11) 2188-9000".to_string(),
            email: "sac@braspress.com.br".to_string(),
            postal_code: "03440-000".to_string(),
            website: Some("https://www.braspress.com".to_string()),
            opening_hours: "Seg-Sex 08:00-18:00".to_string(),
        },
        Agency {
            id: Agency::make_id(AgencyKind::LogisticsHub, "seed"),
            kind: AgencyKind::LogisticsHub,
            name: "Centro de Distribuição Guarulhos".to_string(),
            coords: Some(Coordinates::new(-23.4356, -46.4731).unwrap()),
            street_address: "Rod. Hélio Smidt, s/n - Cumbica".to_string(),
            phone: "(11) 2445-2945".to_string(),
            email: "cd.guarulhos@example.com.br".to_string(),
            postal_code: "07190-100".to_string(),
            website: None,
            opening_hours: "24h".to_string(),
        },
    ]
}

/// Seed the store if, and only if, it is empty.
///
/// Returns the agencies now backing the resolver: the seed list when
/// seeding happened, the existing contents otherwise. Never fails — a
/// store write error is logged and the in-memory seed list is still
/// returned so callers have candidates to rank.
pub fn seed_if_empty(store: &GeoCache) -> Vec<Agency> {
    if !store.is_empty() {
        return store.get_all();
    }

    let seeds = seed_agencies();
    info!("GeoCache empty, seeding {} fallback agencies", seeds.len());

    if let Err(e) = store.put_all(&seeds) {
        warn!("failed to persist seed agencies: {}", e);
    }

    seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GeoCacheConfig;
    use tempfile::tempdir;

    #[test]
    fn seed_covers_every_category() {
        let seeds = seed_agencies();
        assert_eq!(seeds.len(), AgencyKind::ALL.len());
        for kind in AgencyKind::ALL {
            assert!(
                seeds.iter().any(|a| a.kind == kind),
                "no seed for {}",
                kind
            );
        }
    }

    #[test]
    fn seeds_have_coordinates() {
        for seed in seed_agencies() {
            assert!(seed.coords.is_some(), "seed {} lacks coordinates", seed.id);
        }
    }

    #[test]
    fn seeds_empty_store() {
        let dir = tempdir().unwrap();
        let store = GeoCache::new(GeoCacheConfig::new(dir.path().join("cache.json")));

        let seeded = seed_if_empty(&store);
        assert_eq!(seeded.len(), 4);
        assert_eq!(store.count(), 4);
    }

    #[test]
    fn noop_when_store_populated() {
        let dir = tempdir().unwrap();
        let store = GeoCache::new(GeoCacheConfig::new(dir.path().join("cache.json")));

        let one = vec![seed_agencies().remove(0)];
        store.put_all(&one).unwrap();

        let result = seed_if_empty(&store);
        assert_eq!(result.len(), 1);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn returns_seeds_even_when_store_unwritable() {
        let store = GeoCache::new(GeoCacheConfig::new("/proc/denied/cache.json"));

        let seeded = seed_if_empty(&store);
        assert_eq!(seeded.len(), 4);
    }
}
