//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;

/// Query parameters for the station lookup endpoint.
///
/// Every parameter is optional; missing ones fall back to the default
/// query (Berlin city centre, 5 km, all grades, distance order).
#[derive(Debug, Deserialize)]
pub struct StationsRequest {
    /// Latitude of the query point
    pub lat: Option<f64>,

    /// Longitude of the query point
    pub lng: Option<f64>,

    /// Search radius in kilometres (clamped to 1–25)
    pub rad: Option<u8>,

    /// Fuel grade name ("diesel", "e10", "premium"; anything else
    /// means all grades)
    #[serde(rename = "type")]
    pub fuel_type: Option<String>,

    /// Rank by price instead of distance
    pub sort_by_price: Option<bool>,

    /// Free-form address; when it names a known city, its coordinates
    /// replace `lat`/`lng`
    pub place: Option<String>,
}

/// A station in lookup results.
#[derive(Debug, Serialize)]
pub struct StationView {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,

    /// Formatted street address ("Street 12, Place")
    pub address: String,

    pub lat: f64,
    pub lng: f64,

    /// Distance from the query point in kilometres
    pub distance_km: f64,

    pub diesel: Option<f64>,
    pub e10: Option<f64>,
    pub premium: Option<f64>,
    pub is_open: bool,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            brand: station.brand.clone(),
            address: station.address.to_string(),
            lat: station.lat,
            lng: station.lng,
            distance_km: station.distance_km,
            diesel: station.prices.diesel,
            e10: station.prices.e10,
            premium: station.prices.premium,
            is_open: station.is_open,
        }
    }
}

/// Response for station lookup.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationView>,
}

/// Error payload returned with non-success status codes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
