//! Domain types for the fuel price lookup.
//!
//! This module contains the core model types shared by the client and
//! the ranker. Parameter bundles enforce their invariants at
//! construction time (notably the search radius bounds), so code that
//! receives these types can trust their validity.

mod fuel;
mod query;
mod station;

pub use fuel::FuelType;
pub use query::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, MAX_RADIUS_KM, MIN_RADIUS_KM, StationQuery,
};
pub use station::{Address, PriceSet, Station};
