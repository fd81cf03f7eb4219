//! Fuel station model.

use std::fmt;

use super::FuelType;

/// A fuel station as reported by the price service.
///
/// One successful fetch produces an immutable list of these; the next
/// fetch replaces the list wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Service-assigned station identifier (a UUID in practice).
    pub id: String,

    /// Display name of the station.
    pub name: String,

    /// Brand, when the service knows it.
    pub brand: Option<String>,

    /// Street address.
    pub address: Address,

    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lng: f64,

    /// Distance from the query point in kilometres, as reported by the
    /// service. Never recomputed locally.
    pub distance_km: f64,

    /// Current prices per grade.
    pub prices: PriceSet,

    /// Whether the station is currently open.
    pub is_open: bool,
}

/// Street address of a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub house_number: Option<String>,
    pub place: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.house_number {
            Some(number) => write!(f, "{} {}, {}", self.street, number, self.place),
            None => write!(f, "{}, {}", self.street, self.place),
        }
    }
}

/// Per-grade prices of one station.
///
/// A price is `None` when the station does not sell that grade or the
/// service omitted it. Absence is never represented as a number, so it
/// cannot be confused with an expensive price.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceSet {
    pub diesel: Option<f64>,
    pub e10: Option<f64>,
    pub premium: Option<f64>,
}

impl PriceSet {
    /// The price relevant to a grade selection.
    ///
    /// For a single grade this is that grade's price; for `All` it is
    /// the cheapest grade the station sells, since that is what an
    /// unfiltered view ranks by.
    pub fn for_fuel(&self, fuel_type: FuelType) -> Option<f64> {
        match fuel_type {
            FuelType::Diesel => self.diesel,
            FuelType::E10 => self.e10,
            FuelType::Premium => self.premium,
            FuelType::All => self.cheapest(),
        }
    }

    /// Cheapest of the grades that have a price, if any.
    pub fn cheapest(&self) -> Option<f64> {
        [self.diesel, self.e10, self.premium]
            .into_iter()
            .flatten()
            .min_by(|a, b| a.total_cmp(b))
    }
}
