//! Read models returned by the guestlist queries.

use chrono::{DateTime, Utc};
use common::{GuestName, TableNumber};
use guest_store::{Arrival, Reservation};

/// An entry on the guestlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub name: GuestName,
    pub table_number: TableNumber,
    pub accompanying_guests: i32,
}

impl From<Reservation> for Guest {
    fn from(r: Reservation) -> Self {
        Self {
            name: r.guest_name,
            table_number: r.table_number,
            accompanying_guests: r.accompanying_guests,
        }
    }
}

/// A guest currently in the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivedGuest {
    pub name: GuestName,
    pub accompanying_guests: i32,
    pub arrived_at: DateTime<Utc>,
}

impl From<Arrival> for ArrivedGuest {
    fn from(a: Arrival) -> Self {
        Self {
            name: a.guest_name,
            accompanying_guests: a.accompanying_guests,
            arrived_at: a.arrived_at,
        }
    }
}
