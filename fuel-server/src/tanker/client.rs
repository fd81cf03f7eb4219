//! Tankerkönig HTTP client.
//!
//! Provides the async station lookup against the price aggregation API.
//! Each fetch is a single independent attempt: no retry, no caching.
//! Recovery from a failure is the caller issuing a fresh fetch.

use tracing::debug;

use crate::domain::{FuelType, Station, StationQuery};

use super::convert::convert_stations;
use super::error::TankerError;
use super::types::PriceListResponse;

/// Default base URL for the Tankerkönig price API.
const DEFAULT_BASE_URL: &str = "https://creativecommons.tankerkoenig.de";

/// Sort order requested from the service. Always distance: price
/// ordering is a local post-processing step, never delegated.
const REMOTE_SORT: &str = "dist";

/// Configuration for the price API client.
#[derive(Debug, Clone)]
pub struct TankerConfig {
    /// API key, sent as the `apikey` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TankerConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Tankerkönig price API.
#[derive(Debug, Clone)]
pub struct TankerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TankerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TankerConfig) -> Result<Self, TankerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch stations around a point.
    ///
    /// Coordinates are passed through unvalidated (the service is
    /// authoritative about what it accepts). The radius is expected to
    /// be within the service bounds already; `StationQuery` clamps it
    /// at construction.
    ///
    /// Succeeds only if the transport status is 2xx AND the payload's
    /// own `ok` flag is true. A successful payload with zero stations
    /// is a success with an empty list. Stations that carry no price
    /// for the requested grade are dropped (`All` drops nothing).
    pub async fn fetch_stations(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: u8,
        fuel_type: FuelType,
    ) -> Result<Vec<Station>, TankerError> {
        let url = format!("{}/json/list.php", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lng", longitude.to_string()),
                ("rad", radius_km.to_string()),
                ("type", fuel_type.api_token().to_string()),
                ("sort", REMOTE_SORT.to_string()),
                ("apikey", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TankerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let payload: PriceListResponse =
            serde_json::from_str(&body).map_err(|e| TankerError::Json {
                message: format!("{} (body: {})", e, body.chars().take(200).collect::<String>()),
            })?;

        if !payload.ok {
            return Err(TankerError::Service {
                message: payload
                    .status
                    .unwrap_or_else(|| "request rejected by service".to_string()),
            });
        }

        debug!(
            stations = payload.stations.len(),
            %fuel_type,
            radius_km,
            "price list fetched"
        );

        Ok(filter_by_fuel(convert_stations(payload.stations), fuel_type))
    }

    /// Fetch stations for a bundled query.
    pub async fn fetch(&self, query: &StationQuery) -> Result<Vec<Station>, TankerError> {
        self.fetch_stations(
            query.latitude,
            query.longitude,
            query.radius_km(),
            query.fuel_type,
        )
        .await
    }
}

/// Drop stations that carry no price for the requested grade.
///
/// The service was already asked to filter via the `type` parameter,
/// but its behavior is not guaranteed, so the filter also runs locally.
/// `All` keeps every station: a station need not sell every grade to
/// appear in an unfiltered view.
pub(crate) fn filter_by_fuel(stations: Vec<Station>, fuel_type: FuelType) -> Vec<Station> {
    match fuel_type {
        FuelType::All => stations,
        grade => stations
            .into_iter()
            .filter(|s| s.prices.for_fuel(grade).is_some())
            .collect(),
    }
}
