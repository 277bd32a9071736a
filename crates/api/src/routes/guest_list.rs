//! Reservation endpoints.

use std::sync::{Arc, LazyLock};

use axum::Json;
use axum::extract::{Path, State};
use domain::BookTable;
use guest_store::GuestlistStore;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{AppState, NameResponse, parse_count};
use crate::error::ApiError;
use crate::extract::{ValidatedJson, lenient_text};

static TABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,5}$").expect("table pattern is valid"));

pub(crate) static ACCOMPANYING_GUESTS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("accompanying guests pattern is valid"));

// -- Request types --

#[derive(Debug, Deserialize, Validate)]
pub struct ReservationRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(
        required(message = "Table number is mandatory"),
        length(min = 1, message = "Table number is mandatory"),
        regex(
            path = *TABLE_PATTERN,
            message = "Table number must be a number with up to 5 digits"
        )
    )]
    pub table: Option<String>,

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
pub struct GuestResponse {
    pub name: String,
    pub table: String,
    pub accompanying_guests: String,
}

// -- Handlers --

/// POST /guest_list/:name — book a table for a guest.
#[tracing::instrument(skip(state, req))]
pub async fn add<S: GuestlistStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
    ValidatedJson(req): ValidatedJson<ReservationRequest>,
) -> Result<Json<NameResponse>, ApiError> {
    let table = parse_count("table", req.table.as_deref())?;
    let accompanying_guests =
        parse_count("accompanying_guests", req.accompanying_guests.as_deref())?;

    let name = state
        .service
        .book_table(BookTable::new(name, table, accompanying_guests))
        .await?;

    Ok(Json(NameResponse {
        name: name.into_inner(),
    }))
}

/// GET /guest_list — list every reservation.
#[tracing::instrument(skip(state))]
pub async fn list<S: GuestlistStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<GuestResponse>>, ApiError> {
    let guests = state.service.get_guestlist().await?;

    let responses = guests
        .into_iter()
        .map(|g| GuestResponse {
            name: g.name.into_inner(),
            table: g.table_number.to_string(),
            accompanying_guests: g.accompanying_guests.to_string(),
        })
        .collect();

    Ok(Json(responses))
}
