//! Lookup query parameters.

use super::FuelType;

/// Fallback latitude used before any location is known (Berlin).
pub const DEFAULT_LATITUDE: f64 = 52.520008;

/// Fallback longitude used before any location is known (Berlin).
pub const DEFAULT_LONGITUDE: f64 = 13.404954;

/// Smallest search radius the price service accepts, in kilometres.
pub const MIN_RADIUS_KM: u8 = 1;

/// Largest search radius the price service accepts, in kilometres.
pub const MAX_RADIUS_KM: u8 = 25;

const DEFAULT_RADIUS_KM: u8 = 5;

/// Parameters for one station lookup.
///
/// Constructed fresh per lookup from whatever state the caller holds.
/// Coordinates are unconstrained floats (the remote service is
/// authoritative about what it accepts); the radius is clamped to the
/// service's bounds here, so the client never has to validate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationQuery {
    /// Latitude of the query point, degrees.
    pub latitude: f64,

    /// Longitude of the query point, degrees.
    pub longitude: f64,

    /// Grade filter for the request and the local presence filter.
    pub fuel_type: FuelType,

    /// Rank results by price instead of distance.
    pub sort_by_price: bool,

    // Always within MIN_RADIUS_KM..=MAX_RADIUS_KM.
    radius_km: u8,
}

impl StationQuery {
    /// Create a query for the given point with default radius, grade
    /// and ordering.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            fuel_type: FuelType::All,
            sort_by_price: false,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }

    /// Set the search radius, clamped to the service bounds (1–25 km).
    pub fn with_radius(mut self, radius_km: u8) -> Self {
        self.radius_km = radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
        self
    }

    /// Set the grade filter.
    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }

    /// Rank by price instead of distance.
    pub fn with_sort_by_price(mut self, sort_by_price: bool) -> Self {
        self.sort_by_price = sort_by_price;
        self
    }

    /// Search radius in kilometres. Always within the service bounds.
    pub fn radius_km(&self) -> u8 {
        self.radius_km
    }
}

impl Default for StationQuery {
    /// The fixed fallback query: Berlin city centre, 5 km, all grades,
    /// distance order.
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query() {
        let query = StationQuery::default();

        assert_eq!(query.latitude, DEFAULT_LATITUDE);
        assert_eq!(query.longitude, DEFAULT_LONGITUDE);
        assert_eq!(query.radius_km(), 5);
        assert_eq!(query.fuel_type, FuelType::All);
        assert!(!query.sort_by_price);
    }

    #[test]
    fn builder_methods() {
        let query = StationQuery::new(48.137154, 11.576124)
            .with_radius(10)
            .with_fuel_type(FuelType::Diesel)
            .with_sort_by_price(true);

        assert_eq!(query.latitude, 48.137154);
        assert_eq!(query.radius_km(), 10);
        assert_eq!(query.fuel_type, FuelType::Diesel);
        assert!(query.sort_by_price);
    }

    #[test]
    fn radius_is_clamped() {
        assert_eq!(StationQuery::default().with_radius(0).radius_km(), 1);
        assert_eq!(StationQuery::default().with_radius(1).radius_km(), 1);
        assert_eq!(StationQuery::default().with_radius(25).radius_km(), 25);
        assert_eq!(StationQuery::default().with_radius(200).radius_km(), 25);
    }

    #[test]
    fn coordinates_are_not_validated() {
        // The remote service is authoritative; out-of-range coordinates
        // are passed through as-is.
        let query = StationQuery::new(1234.5, -987.0);
        assert_eq!(query.latitude, 1234.5);
        assert_eq!(query.longitude, -987.0);
    }
}
