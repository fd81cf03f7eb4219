//! Tankerkönig price API client.
//!
//! This module provides an HTTP client for the Tankerkönig fuel price
//! aggregation API.
//!
//! Key characteristics of the API:
//! - a 2xx response still carries its own `ok` flag; only `ok: true`
//!   payloads contain usable data
//! - results are requested sorted by distance; ranking by price is a
//!   local post-processing step (see `crate::ranking`)
//! - a grade a station does not sell is an absent price, never zero
//! - each fetch is a single attempt: no retry, no caching

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{TankerClient, TankerConfig};
pub use convert::convert_stations;
pub use error::TankerError;
pub use mock::MockTankerClient;
pub use types::{PriceListResponse, StationDto};
