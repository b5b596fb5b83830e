//! GeoCache store error types.

/// Errors that can occur when reading or replacing the GeoCache.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// Snapshot could not be serialized
    #[error("store serialization error: {message}")]
    Serialize { message: String },
}
