//! Shared identifier types for the guestlist system.

mod types;

pub use types::{GuestName, TableNumber};
