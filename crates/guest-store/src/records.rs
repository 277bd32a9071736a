//! Rows held by the guest store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GuestName, TableNumber};

/// A seating unit with a fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub number: TableNumber,
    /// Maximum number of people, the guest included.
    pub capacity: i32,
}

impl Table {
    pub fn new(number: impl Into<TableNumber>, capacity: i32) -> Self {
        Self {
            number: number.into(),
            capacity,
        }
    }
}

/// A guest's booking of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub guest_name: GuestName,
    pub table_number: TableNumber,
    pub accompanying_guests: i32,
}

impl Reservation {
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

/// A guest currently in the venue with their entourage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub guest_name: GuestName,
    pub accompanying_guests: i32,
    pub arrived_at: DateTime<Utc>,
}

impl Arrival {
    pub fn new(
        guest_name: impl Into<GuestName>,
        accompanying_guests: i32,
        arrived_at: DateTime<Utc>,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            accompanying_guests,
            arrived_at,
        }
    }

    /// Seats taken by this arrival: the guest plus their entourage.
    pub fn party_size(&self) -> i32 {
        self.accompanying_guests + 1
    }
}
