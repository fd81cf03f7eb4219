//! Mock price client for testing without API access.
//!
//! Loads a canned `json/list.php` response from a JSON file and serves
//! it as if it were a live API response, applying the same payload
//! checks and fuel filtering as the real client.

use std::path::Path;

use crate::domain::{FuelType, Station};

use super::client::filter_by_fuel;
use super::convert::convert_stations;
use super::error::TankerError;
use super::types::PriceListResponse;

/// Mock price client that serves data from a JSON file.
///
/// Useful for development and tests without real API credentials.
#[derive(Debug, Clone)]
pub struct MockTankerClient {
    payload: PriceListResponse,
}

impl MockTankerClient {
    /// Create a mock client from a canned response file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TankerError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| TankerError::Api {
            status: 0,
            message: format!("failed to read mock data file {path:?}: {e}"),
        })?;

        let payload: PriceListResponse =
            serde_json::from_str(&json).map_err(|e| TankerError::Json {
                message: format!("failed to parse mock data file {path:?}: {e}"),
            })?;

        Ok(Self { payload })
    }

    /// Fetch stations around a point.
    ///
    /// Mimics `TankerClient::fetch_stations`. Location parameters are
    /// ignored — mock data is static — but the payload status check
    /// and the fuel filter behave exactly like the real client.
    pub async fn fetch_stations(
        &self,
        _latitude: f64,
        _longitude: f64,
        _radius_km: u8,
        fuel_type: FuelType,
    ) -> Result<Vec<Station>, TankerError> {
        if !self.payload.ok {
            return Err(TankerError::Service {
                message: self
                    .payload
                    .status
                    .clone()
                    .unwrap_or_else(|| "request rejected by service".to_string()),
            });
        }

        let stations = convert_stations(self.payload.stations.clone());
        Ok(filter_by_fuel(stations, fuel_type))
    }
}
