//! Proximity resolver.
//!
//! Answers "which agencies are within radius R of this postal code,
//! nearest first". The resolution chain is: local CEP validation, postal
//! code → structured address, address → origin coordinates, then
//! haversine ranking over the cached directory. The origin is re-derived
//! on every call; only the agency directory is cached.

mod distance;
mod error;

pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use error::LocatorError;

use std::future::Future;

use tracing::{debug, info, warn};

use crate::domain::{Agency, Cep, Coordinates, RankedAgency};
use crate::geocode::GeocoderClient;
use crate::import::Importer;
use crate::store::{GeoCache, seed_if_empty};
use crate::viacep::{PostalAddress, ViaCepClient};

/// Source of structured addresses for postal codes.
///
/// This abstraction allows the resolver to be tested with stub data.
/// `Ok(None)` means the service does not know the code.
pub trait PostalLookup {
    fn lookup(
        &self,
        cep: &Cep,
    ) -> impl Future<Output = Result<Option<PostalAddress>, LocatorError>> + Send;
}

/// Source of best-match coordinates for a free-text address.
///
/// `Ok(None)` means the geocoder found no match.
pub trait Geocoder {
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Coordinates>, LocatorError>> + Send;
}

/// Source of fresh agency records for an empty cache.
pub trait AgencySource {
    fn refresh(&self) -> impl Future<Output = Result<Vec<Agency>, LocatorError>> + Send;
}

impl PostalLookup for ViaCepClient {
    async fn lookup(&self, cep: &Cep) -> Result<Option<PostalAddress>, LocatorError> {
        ViaCepClient::lookup(self, cep)
            .await
            .map_err(|e| LocatorError::Upstream(e.to_string()))
    }
}

impl Geocoder for GeocoderClient {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, LocatorError> {
        GeocoderClient::geocode(self, query)
            .await
            .map_err(|e| LocatorError::Upstream(e.to_string()))
    }
}

impl AgencySource for Importer {
    async fn refresh(&self) -> Result<Vec<Agency>, LocatorError> {
        let report = self.import_from_source().await?;
        Ok(report.agencies)
    }
}

/// The proximity resolver.
///
/// Generic over its collaborator seams; production code wires in
/// `ViaCepClient`, `GeocoderClient` and `Importer`, tests wire in stubs.
/// The store is injected explicitly — there is no hidden process-wide
/// handle, so independent instances never share state.
pub struct Locator<P, G, S> {
    postal: P,
    geocoder: G,
    source: S,
    store: GeoCache,
}

impl<P: PostalLookup, G: Geocoder, S: AgencySource> Locator<P, G, S> {
    /// Create a resolver over the given collaborators and store.
    pub fn new(postal: P, geocoder: G, source: S, store: GeoCache) -> Self {
        Self {
            postal,
            geocoder,
            source,
            store,
        }
    }

    /// Find agencies within `radius_km` of a postal code, nearest first.
    ///
    /// Validation happens before any network access: non-digit characters
    /// are stripped and the remainder must be exactly 8 digits. The
    /// returned list is uncapped, sorted by non-decreasing distance with
    /// ties kept in store iteration order, and every entry carries its
    /// distance from the origin. An empty cache triggers an import, or
    /// the seed fallback when the import fails.
    pub async fn find_nearby(
        &self,
        postal_code: &str,
        radius_km: f64,
    ) -> Result<Vec<RankedAgency>, LocatorError> {
        let cep = Cep::parse(postal_code)?;

        let address = self
            .postal
            .lookup(&cep)
            .await?
            .ok_or(LocatorError::PostalCodeNotFound(cep))?;

        let query = address.as_geocode_query();
        let origin = self
            .geocoder
            .geocode(&query)
            .await?
            .ok_or(LocatorError::GeocodeFailed { query })?;

        debug!("resolved {} to origin {}", cep, origin);

        let candidates = self.candidates().await;

        let mut ranked: Vec<RankedAgency> = candidates
            .into_iter()
            .filter_map(|agency| {
                let coords = agency.coords?;
                let distance_km = haversine_km(origin, coords);
                (distance_km <= radius_km).then_some(RankedAgency {
                    agency,
                    distance_km,
                })
            })
            .collect();

        // Stable sort: equal distances keep store iteration order
        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        info!(
            "{} agencies within {} km of {}",
            ranked.len(),
            radius_km,
            cep
        );

        Ok(ranked)
    }

    /// Every cached agency, in stored order. Plain store read; does not
    /// trigger an import.
    pub fn all_cached(&self) -> Vec<Agency> {
        self.store.get_all()
    }

    /// Force a directory refresh from the source.
    pub async fn import_from_source(&self) -> Result<Vec<Agency>, LocatorError> {
        self.source.refresh().await
    }

    /// Candidate agencies for ranking, populating an empty cache first.
    ///
    /// Import failure falls back to the seed list so a first run without
    /// network access still has one candidate per category.
    async fn candidates(&self) -> Vec<Agency> {
        if !self.store.is_empty() {
            return self.store.get_all();
        }

        match self.source.refresh().await {
            Ok(agencies) if !agencies.is_empty() => agencies,
            Ok(_) => {
                warn!("import returned no agencies, using seed fallback");
                seed_if_empty(&self.store)
            }
            Err(e) => {
                warn!("import failed ({}), using seed fallback", e);
                seed_if_empty(&self.store)
            }
        }
    }
}
