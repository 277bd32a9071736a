//! API error types with HTTP response mapping.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, GuestlistError};
use validator::ValidationErrors;

/// Message returned when the failure is not a guestlist rule violation.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Request fields failed format validation, keyed by field name.
    Validation(BTreeMap<String, String>),
    /// The request body could not be read as JSON.
    BadRequest(String),
    /// Domain logic error.
    Domain(DomainError),
}

/// Client-facing message for each rule violation.
pub fn reason(kind: GuestlistError) -> &'static str {
    match kind {
        GuestlistError::TableNotFound => "Table has not been found",
        GuestlistError::TableCapacityExceeded => "The table capacity has been exceeded",
        GuestlistError::TableNotAvailable => "The table has already been reserved",
        GuestlistError::GuestBookedAlready => "The guest has already got a reservation",
        GuestlistError::GuestHasAlreadyArrived => "The guest has already arrived",
        GuestlistError::GuestNotCheckedIn => "The guest is not in the venue",
        GuestlistError::ReservationNotFound => "The guest has not got a valid reservation",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => {
                tracing::warn!(?fields, "400 BAD REQUEST");
                (StatusCode::BAD_REQUEST, axum::Json(fields)).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "400 BAD REQUEST");
                reason_response(StatusCode::BAD_REQUEST, &msg)
            }
            ApiError::Domain(err) => match err.kind() {
                Some(kind) => {
                    let msg = reason(kind);
                    tracing::warn!(reason = msg, "409 CONFLICT");
                    reason_response(StatusCode::CONFLICT, msg)
                }
                None => {
                    tracing::error!(error = %err, "internal server error");
                    reason_response(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
                }
            },
        }
    }
}

fn reason_response(status: StatusCode, reason: &str) -> Response {
    let body = serde_json::json!({ "reason": reason });
    (status, axum::Json(body)).into_response()
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

/// Keeps one message per field, preferring the "mandatory" rules over the
/// pattern rule when both fail on an empty value.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let chosen = errs
                    .iter()
                    .find(|e| e.code == "required" || e.code == "length")
                    .or_else(|| errs.first())?;
                let message = chosen
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                Some((field.to_string(), message))
            })
            .collect();

        ApiError::Validation(fields)
    }
}
