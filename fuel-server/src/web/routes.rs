//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::domain::{FuelType, StationQuery};
use crate::places::resolve_address;
use crate::ranking::rank_stations;
use crate::tanker::TankerError;

use super::dto::{ErrorResponse, StationsRequest, StationsResponse, StationView};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up stations around a point (or a named place) and rank them.
///
/// One fetch per request; a failed fetch is reported, not retried —
/// retrying is the caller issuing the request again.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationsRequest>,
) -> Result<Json<StationsResponse>, AppError> {
    let mut query = StationQuery::default();

    if let Some(lat) = req.lat {
        query.latitude = lat;
    }
    if let Some(lng) = req.lng {
        query.longitude = lng;
    }
    if let Some(rad) = req.rad {
        query = query.with_radius(rad);
    }
    if let Some(name) = &req.fuel_type {
        query.fuel_type = FuelType::from_name(name);
    }
    if let Some(sort_by_price) = req.sort_by_price {
        query.sort_by_price = sort_by_price;
    }

    // A recognized place name takes precedence over explicit coordinates
    if let Some(place) = req.place.as_deref().filter(|p| !p.is_empty()) {
        let (lat, lng) = resolve_address(place).ok_or_else(|| AppError::BadRequest {
            message: format!("Unknown place: {place}"),
        })?;
        query.latitude = lat;
        query.longitude = lng;
    }

    let stations = state.tanker.fetch(&query).await?;
    let stations = rank_stations(stations, query.fuel_type, query.sort_by_price);

    let stations = stations.iter().map(StationView::from_station).collect();
    Ok(Json(StationsResponse { stations }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
}

impl From<TankerError> for AppError {
    fn from(e: TankerError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        tracing::warn!(%status, "request failed: {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanker_errors_map_to_upstream() {
        let err = AppError::from(TankerError::Api {
            status: 500,
            message: "boom".into(),
        });

        match err {
            AppError::Upstream { message } => {
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn stations_request_renames_the_type_field() {
        let req: StationsRequest =
            serde_json::from_str(r#"{"lat": 52.5, "type": "diesel", "sort_by_price": true}"#)
                .unwrap();

        assert_eq!(req.lat, Some(52.5));
        assert_eq!(req.lng, None);
        assert_eq!(req.fuel_type.as_deref(), Some("diesel"));
        assert_eq!(req.sort_by_price, Some(true));
        assert_eq!(req.place, None);
    }
}
