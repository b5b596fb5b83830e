//! Free-text geocoding client (Nominatim-compatible API).

use serde::Deserialize;
use tracing::debug;

use crate::domain::Coordinates;

use super::error::GeocodeError;

/// Default base URL for the public Nominatim service.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim returns lat/lon as JSON strings.
#[derive(Debug, Deserialize)]
struct PlaceDto {
    lat: String,
    lon: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// User-Agent header (public Nominatim requires one)
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a config pointing at the public service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "agency-locator/0.1".to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the geocoding service.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocoderClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Geocode a free-text address to its best-match coordinates.
    ///
    /// Requests a single result; `Ok(None)` means the service found no
    /// match at all.
    pub async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        debug!("geocoding \"{}\"", query);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let places: Vec<PlaceDto> = serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = place.lat.parse().map_err(|_| GeocodeError::Json {
            message: format!("non-numeric latitude: {}", place.lat),
        })?;
        let lon: f64 = place.lon.parse().map_err(|_| GeocodeError::Json {
            message: format!("non-numeric longitude: {}", place.lon),
        })?;

        let coords =
            Coordinates::new(lat, lon).map_err(|e| GeocodeError::BadCoordinates {
                message: e.to_string(),
            })?;

        Ok(Some(coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn config_defaults() {
        let config = GeocoderConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn geocode_best_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "-23.5613", "lon": "-46.6565", "display_name": "Avenida Paulista"}
            ])))
            .mount(&server)
            .await;

        let client =
            GeocoderClient::new(GeocoderConfig::new().with_base_url(server.uri())).unwrap();

        let coords = client
            .geocode("Avenida Paulista, São Paulo, SP, Brasil")
            .await
            .unwrap()
            .unwrap();
        assert!((coords.lat - -23.5613).abs() < 1e-9);
        assert!((coords.lon - -46.6565).abs() < 1e-9);
    }

    #[tokio::test]
    async fn zero_results_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client =
            GeocoderClient::new(GeocoderConfig::new().with_base_url(server.uri())).unwrap();

        assert!(client.geocode("nowhere at all").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client =
            GeocoderClient::new(GeocoderConfig::new().with_base_url(server.uri())).unwrap();

        match client.geocode("anywhere").await {
            Err(GeocodeError::Api { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn out_of_range_coordinates_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "123.0", "lon": "0.0"}
            ])))
            .mount(&server)
            .await;

        let client =
            GeocoderClient::new(GeocoderConfig::new().with_base_url(server.uri())).unwrap();

        assert!(matches!(
            client.geocode("broken").await,
            Err(GeocodeError::BadCoordinates { .. })
        ));
    }
}
