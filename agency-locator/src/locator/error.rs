//! Resolver error taxonomy.
//!
//! These are the errors surfaced to callers for user-facing messaging.
//! Nothing is swallowed: a failure at any step of the resolution chain
//! propagates with enough context to tell the user what went wrong.

use crate::domain::{Cep, InvalidCep};
use crate::import::ImportError;
use crate::store::StoreError;

/// Errors from the proximity resolver.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    /// Postal code failed local validation; no network access happened
    #[error(transparent)]
    InvalidPostalCode(#[from] InvalidCep),

    /// The postal-code service does not know this code
    #[error("postal code {0} not found")]
    PostalCodeNotFound(Cep),

    /// The geocoder produced zero results for the resolved address
    #[error("no geocoding result for \"{query}\"")]
    GeocodeFailed { query: String },

    /// Directory import failed
    #[error(transparent)]
    Import(#[from] ImportError),

    /// GeoCache store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generic upstream transport failure
    #[error("upstream service unavailable: {0}")]
    Upstream(String),
}
