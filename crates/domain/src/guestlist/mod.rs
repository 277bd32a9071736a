//! Guestlist service and related types.

mod commands;
mod service;
mod views;

pub use commands::{BookTable, CheckIn, CheckOut};
pub use service::GuestlistService;
pub use views::{ArrivedGuest, Guest};

use thiserror::Error;

/// Booking and attendance rule violations.
///
/// The variants carry no payload; turning them into client-facing messages
/// is the job of the adapter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GuestlistError {
    /// No table with the requested number exists.
    #[error("table not found")]
    TableNotFound,

    /// The party does not fit at the table.
    #[error("table capacity exceeded")]
    TableCapacityExceeded,

    /// Another guest already reserved the table.
    #[error("table not available")]
    TableNotAvailable,

    /// The guest already holds a reservation.
    #[error("guest booked already")]
    GuestBookedAlready,

    /// The guest is already in the venue.
    #[error("guest has already arrived")]
    GuestHasAlreadyArrived,

    /// The guest is not in the venue.
    #[error("guest not checked in")]
    GuestNotCheckedIn,

    /// The guest has no reservation.
    #[error("reservation not found")]
    ReservationNotFound,
}

impl GuestlistError {
    /// Stable identifier used for logs and metric labels.
    pub fn code(&self) -> &'static str {
        match self {
            GuestlistError::TableNotFound => "TABLE_NOT_FOUND",
            GuestlistError::TableCapacityExceeded => "TABLE_CAPACITY_EXCEEDED",
            GuestlistError::TableNotAvailable => "TABLE_NOT_AVAILABLE",
            GuestlistError::GuestBookedAlready => "GUEST_BOOKED_ALREADY",
            GuestlistError::GuestHasAlreadyArrived => "GUEST_HAS_ALREADY_ARRIVED",
            GuestlistError::GuestNotCheckedIn => "GUEST_NOT_CHECKED_IN",
            GuestlistError::ReservationNotFound => "RESERVATION_NOT_FOUND",
        }
    }
}
