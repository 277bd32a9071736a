//! Storage for the guestlist system.
//!
//! Exposes narrow capability traits for tables, reservations and arrivals,
//! with an in-memory implementation and a PostgreSQL implementation.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod records;
pub mod store;

pub use common::{GuestName, TableNumber};
pub use error::{Result, StoreError};
pub use memory::InMemoryGuestStore;
pub use postgres::PostgresGuestStore;
pub use records::{Arrival, Reservation, Table};
pub use store::{ArrivalStore, GuestlistStore, ReservationStore, TableStore};
