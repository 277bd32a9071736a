//! Domain layer for the guestlist system.
//!
//! This crate provides:
//! - `GuestlistService`, which enforces the booking and attendance rules
//! - Command structs for booking, check-in and check-out
//! - Read models for the guestlist and the guests in the venue
//! - The closed `GuestlistError` enumeration and the `Clock` collaborator

pub mod clock;
pub mod error;
pub mod guestlist;

pub use clock::{Clock, FixedClock, SystemClock};
pub use common::{GuestName, TableNumber};
pub use error::DomainError;
pub use guestlist::{
    ArrivedGuest, BookTable, CheckIn, CheckOut, Guest, GuestlistError, GuestlistService,
};
