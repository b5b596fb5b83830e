//! Geocoding client error types.

/// Errors from the geocoding client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Result carried coordinates that are not valid WGS84
    #[error("invalid coordinates in result: {message}")]
    BadCoordinates { message: String },
}
