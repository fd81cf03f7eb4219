//! Location-based fuel price lookup server.
//!
//! Queries the Tankerkönig price aggregation API for fuel stations
//! around a point, filters them by fuel grade availability, and ranks
//! them by distance or price.

pub mod domain;
pub mod places;
pub mod ranking;
pub mod tanker;
pub mod web;
