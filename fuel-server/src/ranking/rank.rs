//! Station ordering for display.
//!
//! The price service returns stations sorted by distance. Ordering by
//! price is applied here, locally, as a pure post-processing step.

use crate::domain::{FuelType, Station};

/// Order stations for display.
///
/// With `sort_by_price` unset, the input order is returned unchanged —
/// that is distance order, since the service was asked to sort by
/// distance. Otherwise stations are sorted ascending by the price of
/// the requested grade (for `All`: the cheapest grade a station
/// sells). A station without a usable price sorts after every priced
/// station; it is never excluded and never an error. The sort is
/// stable, so stations with equal prices keep their distance order.
pub fn rank_stations(
    mut stations: Vec<Station>,
    fuel_type: FuelType,
    sort_by_price: bool,
) -> Vec<Station> {
    if !sort_by_price {
        return stations;
    }

    stations.sort_by(|a, b| price_key(a, fuel_type).total_cmp(&price_key(b, fuel_type)));
    stations
}

/// Comparison key for one station: the relevant price, or positive
/// infinity when absent.
///
/// The sentinel exists only at comparison time. Missing prices are
/// never materialized as numbers in the data model.
fn price_key(station: &Station, fuel_type: FuelType) -> f64 {
    station
        .prices
        .for_fuel(fuel_type)
        .unwrap_or(f64::INFINITY)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Address, PriceSet};
    use proptest::prelude::*;

    fn make_station(id: usize, dist: f64, prices: PriceSet) -> Station {
        Station {
            id: format!("station-{id}"),
            name: format!("Station {id}"),
            brand: None,
            address: Address {
                street: "Str".to_string(),
                house_number: None,
                place: "Berlin".to_string(),
            },
            lat: 52.5,
            lng: 13.4,
            distance_km: dist,
            prices,
            is_open: true,
        }
    }

    /// Prices in whole cents keep comparisons exact and make equal keys
    /// reasonably likely.
    fn price_strategy() -> impl Strategy<Value = Option<f64>> {
        prop::option::of((150u32..200).prop_map(|cents| cents as f64 / 100.0))
    }

    fn stations_strategy() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec(
            (price_strategy(), price_strategy(), price_strategy()),
            0..20,
        )
        .prop_map(|price_sets| {
            price_sets
                .into_iter()
                .enumerate()
                .map(|(i, (diesel, e10, premium))| {
                    // Distance increases with index: input is in the
                    // distance order the service would return.
                    make_station(
                        i,
                        i as f64 * 0.5,
                        PriceSet {
                            diesel,
                            e10,
                            premium,
                        },
                    )
                })
                .collect()
        })
    }

    fn fuel_type_strategy() -> impl Strategy<Value = FuelType> {
        prop::sample::select(vec![
            FuelType::Diesel,
            FuelType::E10,
            FuelType::Premium,
            FuelType::All,
        ])
    }

    fn key(station: &Station, fuel_type: FuelType) -> f64 {
        station.prices.for_fuel(fuel_type).unwrap_or(f64::INFINITY)
    }

    proptest! {
        #[test]
        fn output_is_sorted_by_price_key(
            stations in stations_strategy(),
            fuel_type in fuel_type_strategy(),
        ) {
            let ranked = rank_stations(stations, fuel_type, true);

            for window in ranked.windows(2) {
                prop_assert!(
                    key(&window[0], fuel_type) <= key(&window[1], fuel_type),
                    "not sorted: {} before {}",
                    window[0].id,
                    window[1].id
                );
            }
        }

        #[test]
        fn output_is_a_permutation_of_the_input(
            stations in stations_strategy(),
            fuel_type in fuel_type_strategy(),
        ) {
            let mut input_ids: Vec<String> =
                stations.iter().map(|s| s.id.clone()).collect();

            let ranked = rank_stations(stations, fuel_type, true);

            let mut output_ids: Vec<String> =
                ranked.iter().map(|s| s.id.clone()).collect();

            input_ids.sort();
            output_ids.sort();
            prop_assert_eq!(input_ids, output_ids);
        }

        #[test]
        fn equal_keys_keep_input_order(
            stations in stations_strategy(),
            fuel_type in fuel_type_strategy(),
        ) {
            // Station ids encode the input (distance) order, so within
            // a run of equal keys they must stay ascending.
            let ranked = rank_stations(stations, fuel_type, true);

            for window in ranked.windows(2) {
                if key(&window[0], fuel_type) == key(&window[1], fuel_type) {
                    prop_assert!(
                        window[0].distance_km <= window[1].distance_km,
                        "stability violated between {} and {}",
                        window[0].id,
                        window[1].id
                    );
                }
            }
        }

        #[test]
        fn ranking_is_idempotent(
            stations in stations_strategy(),
            fuel_type in fuel_type_strategy(),
        ) {
            let once = rank_stations(stations, fuel_type, true);
            let twice = rank_stations(once.clone(), fuel_type, true);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn unsorted_flag_is_the_identity(
            stations in stations_strategy(),
            fuel_type in fuel_type_strategy(),
        ) {
            let output = rank_stations(stations.clone(), fuel_type, false);
            prop_assert_eq!(output, stations);
        }
    }
}
