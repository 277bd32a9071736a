//! HTTP route handlers.

pub mod guest_list;
pub mod guests;
pub mod health;
pub mod metrics;
pub mod seats;

use domain::GuestlistService;
use guest_store::GuestlistStore;
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: GuestlistStore> {
    pub service: GuestlistService<S>,
}

/// Body returned by booking and check-in.
#[derive(Serialize)]
pub struct NameResponse {
    pub name: String,
}

/// Parses a field that already passed its digits-only validation.
fn parse_count(field: &str, value: Option<&str>) -> Result<i32, ApiError> {
    value
        .unwrap_or_default()
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid {field}: {e}")))
}
