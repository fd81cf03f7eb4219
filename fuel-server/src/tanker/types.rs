//! Price API response DTOs.
//!
//! These types map directly to the Tankerkönig `json/list.php` JSON
//! response. Price fields use `Option` because the service omits or
//! nulls a grade a station does not sell.

use serde::Deserialize;

/// Response from `json/list.php`.
///
/// A 2xx transport status is not enough: the payload carries its own
/// `ok` flag, and only `ok: true` responses contain usable data.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceListResponse {
    /// Whether the service accepted the request.
    pub ok: bool,

    /// License note for the price data.
    pub license: Option<String>,

    /// Attribution note (the upstream data provider).
    pub data: Option<String>,

    /// Service status: "ok" on success, an error description otherwise.
    pub status: Option<String>,

    /// Stations within the requested radius. Absent on failed requests,
    /// and may legitimately be empty on successful ones.
    #[serde(default)]
    pub stations: Vec<StationDto>,
}

/// One station entry in the price list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub street: String,
    pub place: String,
    pub lat: f64,
    pub lng: f64,

    /// Distance from the query point in kilometres.
    pub dist: f64,

    pub diesel: Option<f64>,
    pub e10: Option<f64>,
    pub premium: Option<f64>,
    pub is_open: bool,
    pub house_number: Option<String>,
}
