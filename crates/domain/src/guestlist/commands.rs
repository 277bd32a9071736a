//! Guestlist commands.

use common::{GuestName, TableNumber};

/// Command to reserve a table for a guest.
#[derive(Debug, Clone)]
pub struct BookTable {
    /// The guest the reservation is held under.
    pub guest_name: GuestName,

    /// The table to reserve.
    pub table_number: TableNumber,

    /// People expected to come with the guest.
    pub accompanying_guests: i32,
}

impl BookTable {
    /// Creates a new BookTable command.
    pub fn new(
        guest_name: impl Into<GuestName>,
        table_number: impl Into<TableNumber>,
        accompanying_guests: i32,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            table_number: table_number.into(),
            accompanying_guests,
        }
    }
}

/// Command to record a guest's arrival.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub guest_name: GuestName,

    /// People actually arriving with the guest, which may differ from the
    /// number given at booking time.
    pub accompanying_guests: i32,
}

impl CheckIn {
    /// Creates a new CheckIn command.
    pub fn new(guest_name: impl Into<GuestName>, accompanying_guests: i32) -> Self {
        Self {
            guest_name: guest_name.into(),
            accompanying_guests,
        }
    }
}

/// Command to record a guest leaving the venue.
#[derive(Debug, Clone)]
pub struct CheckOut {
    pub guest_name: GuestName,
}

impl CheckOut {
    /// Creates a new CheckOut command.
    pub fn new(guest_name: impl Into<GuestName>) -> Self {
        Self {
            guest_name: guest_name.into(),
        }
    }
}
