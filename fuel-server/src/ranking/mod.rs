//! Station ordering.
//!
//! Pure, synchronous ranking of fetched station lists: distance order
//! passes through untouched, price order is computed locally with
//! missing prices pushed to the end.

mod rank;

pub use rank::rank_stations;
