use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{NearbyDto, StationDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecobici::prelude::*;
use tracing::debug;

/// Stations around `reference` (defaults to the configured point) within
/// `radius_km` kilometers, ordered by `order`.
pub async fn nearby(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let filter = filter_from_params(&params)?;
    let reference = match params.get("reference") {
        Some(value) => value
            .parse::<Coordinate>()
            .map_err(|_| StatusCode::BAD_REQUEST)?,
        None => state.reference,
    };

    let nearby = if reference == state.reference {
        filter.apply(&state.repository.stations)
    } else {
        let mut stations = state.repository.stations.to_vec();
        annotate(&reference, &mut stations);
        filter.apply(&stations)
    };
    debug!(
        "{} stations within {} of {reference} by {}",
        nearby.len(),
        filter.radius,
        filter.order
    );

    let dto = NearbyDto::from(
        &nearby,
        filter.radius.as_kilometers(),
        filter.order,
        reference,
    );
    Ok(Json(dto).into_response())
}

pub async fn station(
    Path(id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let station = state
        .repository
        .station_by_id(id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(StationDto::from(station)).into_response())
}

fn filter_from_params(params: &HashMap<String, String>) -> Result<Filter, StatusCode> {
    let mut filter = Filter::default();
    if let Some(value) = params.get("radius_km") {
        let kilometers: u32 = value.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        filter = filter.with_radius_km(kilometers);
    }
    if let Some(value) = params.get("order") {
        let order: OrderBy = value.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        filter = filter.with_order(order);
    }
    Ok(filter)
}
