//! Seat occupancy endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use guest_store::GuestlistStore;
use serde::Serialize;

use super::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct SeatsEmptyResponse {
    pub seats_empty: String,
}

/// GET /seats_empty — count unoccupied seats across all tables.
#[tracing::instrument(skip(state))]
pub async fn empty<S: GuestlistStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<SeatsEmptyResponse>, ApiError> {
    let seats = state.service.get_seats_empty().await?;
    metrics::gauge!("guestlist_seats_empty").set(seats as f64);
    Ok(Json(SeatsEmptyResponse {
        seats_empty: seats.to_string(),
    }))
}
