//! Driving-route client (OSRM-compatible API).

use tracing::debug;

use crate::domain::Coordinates;

use super::error::RouteError;
use super::types::{Route, RoutingResponse};

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RouteClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteClientConfig {
    /// Create a config pointing at the public service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for RouteClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the routing engine.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    /// Create a new routing client.
    pub fn new(config: RouteClientConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Request a driving route between two points.
    ///
    /// The engine's waypoint order is `(lon, lat)` — the reverse of the
    /// axis order used everywhere else in this crate. The transposition
    /// happens only here, in the URL. Full geometry is requested; the
    /// first candidate route is returned, and an empty candidate list is
    /// `NoRouteFound` with no partial value.
    pub async fn route(
        &self,
        origin: Coordinates,
        dest: Coordinates,
    ) -> Result<Route, RouteError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, origin.lon, origin.lat, dest.lon, dest.lat
        );
        debug!("routing {} -> {}", origin, dest);

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "polyline")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: RoutingResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Json {
                message: e.to_string(),
            })?;

        let first = parsed
            .routes
            .into_iter()
            .next()
            .ok_or(RouteError::NoRouteFound)?;

        Ok(Route::from(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = RouteClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn waypoints_are_lon_lat_ordered() {
        let server = MockServer::start().await;
        // The path must carry lon before lat for each waypoint
        Mock::given(method("GET"))
            .and(path("/route/v1/driving/-46.6333,-23.5505;-46.47,-23.43"))
            .and(query_param("overview", "full"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Ok",
                "routes": [
                    {"geometry": "poly", "distance": 30000.0, "duration": 1800.0}
                ]
            })))
            .mount(&server)
            .await;

        let client =
            RouteClient::new(RouteClientConfig::new().with_base_url(server.uri())).unwrap();

        let route = client
            .route(coords(-23.5505, -46.6333), coords(-23.43, -46.47))
            .await
            .unwrap();

        assert_eq!(route.geometry, "poly");
        assert!((route.distance_km - 30.0).abs() < 1e-9);
        assert!((route.duration_min - 30.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn picks_first_of_multiple_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "Ok",
                "routes": [
                    {"geometry": "first", "distance": 1000.0, "duration": 60.0},
                    {"geometry": "second", "distance": 500.0, "duration": 30.0}
                ]
            })))
            .mount(&server)
            .await;

        let client =
            RouteClient::new(RouteClientConfig::new().with_base_url(server.uri())).unwrap();

        let route = client
            .route(coords(-23.5, -46.6), coords(-23.4, -46.5))
            .await
            .unwrap();
        assert_eq!(route.geometry, "first");
    }

    #[tokio::test]
    async fn empty_route_list_is_no_route_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": "NoRoute",
                "routes": []
            })))
            .mount(&server)
            .await;

        let client =
            RouteClient::new(RouteClientConfig::new().with_base_url(server.uri())).unwrap();

        let result = client.route(coords(0.0, 0.0), coords(1.0, 1.0)).await;
        assert!(matches!(result, Err(RouteError::NoRouteFound)));
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client =
            RouteClient::new(RouteClientConfig::new().with_base_url(server.uri())).unwrap();

        match client.route(coords(0.0, 0.0), coords(1.0, 1.0)).await {
            Err(RouteError::Api { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }
}
