//! Arrival and departure endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{CheckIn, CheckOut};
use guest_store::GuestlistStore;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::guest_list::ACCOMPANYING_GUESTS_PATTERN;
use super::{AppState, NameResponse, parse_count};
use crate::error::ApiError;
use crate::extract::{ValidatedJson, lenient_text};

// -- Request types --

#[derive(Debug, Deserialize, Validate)]
pub struct ArrivalRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(
        required(message = "Number of accompanying guests is mandatory"),
        length(min = 1, message = "Number of accompanying guests is mandatory"),
        regex(
            path = *ACCOMPANYING_GUESTS_PATTERN,
            message = "Accompanying guests must be a number with up to 2 digits"
        )
    )]
    pub accompanying_guests: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct ArrivedGuestResponse {
    pub name: String,
    pub accompanying_guests: String,
    pub time_arrived: String,
}

// -- Handlers --

/// PUT /guests/:name — check a guest in with their entourage.
#[tracing::instrument(skip(state, req))]
pub async fn check_in<S: GuestlistStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
    ValidatedJson(req): ValidatedJson<ArrivalRequest>,
) -> Result<Json<NameResponse>, ApiError> {
    let accompanying_guests =
        parse_count("accompanying_guests", req.accompanying_guests.as_deref())?;

    let name = state
        .service
        .check_guest_in(CheckIn::new(name, accompanying_guests))
        .await?;

    Ok(Json(NameResponse {
        name: name.into_inner(),
    }))
}

/// DELETE /guests/:name — check a guest out.
#[tracing::instrument(skip(state))]
pub async fn check_out<S: GuestlistStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.check_guest_out(CheckOut::new(name)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /guests — list the guests currently in the venue.
#[tracing::instrument(skip(state))]
pub async fn list<S: GuestlistStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ArrivedGuestResponse>>, ApiError> {
    let arrived = state.service.get_arrived_guests().await?;

    let responses = arrived
        .into_iter()
        .map(|a| ArrivedGuestResponse {
            name: a.name.into_inner(),
            accompanying_guests: a.accompanying_guests.to_string(),
            time_arrived: a.arrived_at.to_rfc3339(),
        })
        .collect();

    Ok(Json(responses))
}
