//! Postal-code lookup client (ViaCEP-compatible API).

use serde::Deserialize;
use tracing::debug;

use crate::domain::Cep;

use super::error::ViaCepError;

/// Default base URL for the public ViaCEP service.
const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Raw response from the lookup service.
///
/// An unknown CEP comes back as HTTP 200 with `{"erro": true}` rather
/// than a 404, so the marker field must be checked explicitly.
#[derive(Debug, Deserialize)]
struct ViaCepDto {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// A structured address resolved from a postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl PostalAddress {
    /// Assemble the free-text query the geocoder receives.
    ///
    /// Empty components are skipped so sparse rural addresses still
    /// produce a usable query.
    pub fn as_geocode_query(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        for part in [
            self.street.as_str(),
            self.neighborhood.as_str(),
            self.city.as_str(),
            self.state.as_str(),
        ] {
            if !part.is_empty() {
                parts.push(part);
            }
        }
        parts.push("Brasil");
        parts.join(", ")
    }
}

/// Configuration for the postal-code lookup client.
#[derive(Debug, Clone)]
pub struct ViaCepConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ViaCepConfig {
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

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the postal-code lookup service.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new lookup client.
    pub fn new(config: ViaCepConfig) -> Result<Self, ViaCepError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Resolve a CEP to a structured address.
    ///
    /// Returns `Ok(None)` when the service does not know the code.
    pub async fn lookup(&self, cep: &Cep) -> Result<Option<PostalAddress>, ViaCepError> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep.as_str());
        debug!("looking up CEP {}", cep);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ViaCepError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let dto: ViaCepDto = serde_json::from_str(&body).map_err(|e| ViaCepError::Json {
            message: e.to_string(),
        })?;

        if dto.erro {
            return Ok(None);
        }

        Ok(Some(PostalAddress {
            street: dto.logradouro,
            neighborhood: dto.bairro,
            city: dto.localidade,
            state: dto.uf,
        }))
    }
}
