//! Point-of-interest data source client (Overpass-compatible API).

use tracing::debug;

use crate::domain::{Agency, AgencyKind};

use super::convert::element_to_agency;
use super::error::PoiError;
use super::types::PoiResponse;

/// Default base URL for the public Overpass API.
const DEFAULT_BASE_URL: &str = "https://overpass-api.de";

/// Country scope for queries. All categories are queried within one
/// country-level area.
const DEFAULT_COUNTRY_ISO: &str = "BR";

/// Configuration for the point-of-interest client.
#[derive(Debug, Clone)]
pub struct PoiClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// ISO 3166-1 alpha-2 code of the country-level query area
    pub country_iso: String,
    /// Request timeout in seconds. Area queries are slow; this is well
    /// above the other clients' default.
    pub timeout_secs: u64,
}

impl PoiClientConfig {
    /// Create a config pointing at the public service, scoped to Brazil.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_iso: DEFAULT_COUNTRY_ISO.to_string(),
            timeout_secs: 120,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the country scope.
    pub fn with_country(mut self, iso: impl Into<String>) -> Self {
        self.country_iso = iso.into();
        self
    }
}

impl Default for PoiClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the point-of-interest data source.
#[derive(Debug, Clone)]
pub struct PoiClient {
    http: reqwest::Client,
    base_url: String,
    country_iso: String,
}

impl PoiClient {
    /// Create a new point-of-interest client.
    pub fn new(config: PoiClientConfig) -> Result<Self, PoiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            country_iso: config.country_iso,
        })
    }

    /// Build the query for one category: country-level area plus the
    /// category's tag filter, centers included for non-node elements.
    fn category_query(&self, kind: AgencyKind) -> String {
        let (key, value) = kind.tag_filter();
        format!(
            "[out:json][timeout:90];\
             area[\"ISO3166-1\"=\"{}\"][admin_level=2]->.country;\
             nwr[\"{}\"=\"{}\"](area.country);\
             out center;",
            self.country_iso, key, value
        )
    }

    /// Fetch all agencies of one category.
    ///
    /// Elements without coordinates or without a name/brand tag are
    /// dropped; the rest are mapped to agency records with the category
    /// prefix on their ids.
    pub async fn fetch_category(&self, kind: AgencyKind) -> Result<Vec<Agency>, PoiError> {
        let url = format!("{}/api/interpreter", self.base_url);
        let query = self.category_query(kind);
        debug!("querying POI source for category {}", kind);

        let response = self
            .http
            .post(&url)
            .form(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PoiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: PoiResponse = serde_json::from_str(&body).map_err(|e| PoiError::Json {
            message: e.to_string(),
        })?;

        let agencies: Vec<Agency> = parsed
            .elements
            .iter()
            .filter_map(|el| element_to_agency(kind, el))
            .collect();

        debug!(
            "category {}: {} usable of {} elements",
            kind,
            agencies.len(),
            parsed.elements.len()
        );

        Ok(agencies)
    }
}
