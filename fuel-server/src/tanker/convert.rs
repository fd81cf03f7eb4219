//! Conversion from wire DTOs to domain types.
//!
//! The conversion is infallible: serde already rejected payloads with
//! missing required fields, and a payload that fails to parse is a
//! whole-response error rather than a list with holes.

use crate::domain::{Address, PriceSet, Station};

use super::types::StationDto;

impl From<StationDto> for Station {
    fn from(dto: StationDto) -> Self {
        Station {
            id: dto.id,
            name: dto.name,
            // The service sometimes sends "" instead of omitting these
            brand: dto.brand.filter(|b| !b.is_empty()),
            address: Address {
                street: dto.street,
                house_number: dto.house_number.filter(|n| !n.is_empty()),
                place: dto.place,
            },
            lat: dto.lat,
            lng: dto.lng,
            distance_km: dto.dist,
            prices: PriceSet {
                diesel: dto.diesel,
                e10: dto.e10,
                premium: dto.premium,
            },
            is_open: dto.is_open,
        }
    }
}

/// Convert a list of wire stations into domain stations.
pub fn convert_stations(dtos: Vec<StationDto>) -> Vec<Station> {
    dtos.into_iter().map(Station::from).collect()
}
