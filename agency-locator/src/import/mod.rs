//! Directory importer.
//!
//! Rebuilds the GeoCache from the point-of-interest source. Categories
//! are queried concurrently, each into its own list; the store is written
//! exactly once with the combined result, so readers never observe a
//! partially imported directory. A failing category is reported, not
//! fatal — the import only fails outright when every category failed,
//! and in that case nothing is written.

use futures::future::join_all;
use tracing::{info, warn};

use crate::domain::{Agency, AgencyKind};
use crate::poi::{PoiClient, PoiError};
use crate::store::{GeoCache, StoreError};

/// Errors from a directory import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Every category query failed; the cache was left untouched
    #[error("import failed: all {failed} category queries failed")]
    AllCategoriesFailed { failed: usize },

    /// Writing the combined snapshot failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One failed category query.
#[derive(Debug)]
pub struct CategoryFailure {
    pub kind: AgencyKind,
    pub error: PoiError,
}

/// Outcome of an import: the agencies now in the store, plus any
/// categories that could not be refreshed this run.
#[derive(Debug)]
pub struct ImportReport {
    pub agencies: Vec<Agency>,
    pub failures: Vec<CategoryFailure>,
}

impl ImportReport {
    /// Whether every category was refreshed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Rebuilds the agency directory from the point-of-interest source.
pub struct Importer {
    poi: PoiClient,
    store: GeoCache,
}

impl Importer {
    /// Create an importer over the given source client and store.
    pub fn new(poi: PoiClient, store: GeoCache) -> Self {
        Self { poi, store }
    }

    /// Query every category and replace the store with the combined
    /// result.
    ///
    /// Per-category queries run concurrently; each accumulates into an
    /// independent list and the single `put_all` happens only after all
    /// have settled. Category failures are logged and carried in the
    /// report rather than aborting the successful ones.
    pub async fn import_from_source(&self) -> Result<ImportReport, ImportError> {
        let queries = AgencyKind::ALL
            .iter()
            .map(|&kind| async move { (kind, self.poi.fetch_category(kind).await) });

        let results = join_all(queries).await;

        let mut agencies: Vec<Agency> = Vec::new();
        let mut failures: Vec<CategoryFailure> = Vec::new();

        for (kind, result) in results {
            match result {
                Ok(mut batch) => {
                    info!("category {}: imported {} agencies", kind, batch.len());
                    agencies.append(&mut batch);
                }
                Err(error) => {
                    warn!("category {} failed: {}", kind, error);
                    failures.push(CategoryFailure { kind, error });
                }
            }
        }

        if failures.len() == AgencyKind::ALL.len() {
            return Err(ImportError::AllCategoriesFailed {
                failed: failures.len(),
            });
        }

        self.store.put_all(&agencies)?;
        info!(
            "import complete: {} agencies, {} categories failed",
            agencies.len(),
            failures.len()
        );

        Ok(ImportReport { agencies, failures })
    }
}
