use async_trait::async_trait;

use crate::{Arrival, GuestName, Reservation, Result, Table, TableNumber};

/// Read access to the seeded table inventory.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Looks up a table by its number.
    async fn find_table(&self, number: TableNumber) -> Result<Option<Table>>;
}

/// Storage for reservations, keyed by guest name.
///
/// Implementations must reject a second reservation for the same guest with
/// `GuestAlreadyBooked` and a second reservation for the same table with
/// `TableAlreadyReserved`.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Looks up the reservation held by a guest.
    async fn find_reservation_by_guest(&self, guest: &GuestName) -> Result<Option<Reservation>>;

    /// Looks up the reservation referencing a table.
    async fn find_reservation_by_table(&self, number: TableNumber) -> Result<Option<Reservation>>;

    /// Returns all reservations in insertion order.
    async fn list_reservations(&self) -> Result<Vec<Reservation>>;

    async fn insert_reservation(&self, reservation: Reservation) -> Result<()>;

    /// Removes a guest's reservation. Returns false if there was none.
    async fn delete_reservation(&self, guest: &GuestName) -> Result<bool>;
}

/// Storage for guests currently in the venue.
///
/// Implementations must reject a second arrival for the same guest with
/// `GuestAlreadyArrived`.
#[async_trait]
pub trait ArrivalStore: Send + Sync {
    async fn find_arrival(&self, guest: &GuestName) -> Result<Option<Arrival>>;

    /// Returns all arrivals in insertion order.
    async fn list_arrivals(&self) -> Result<Vec<Arrival>>;

    async fn insert_arrival(&self, arrival: Arrival) -> Result<()>;

    /// Removes a guest's arrival. Returns false if there was none.
    async fn delete_arrival(&self, guest: &GuestName) -> Result<bool>;

    /// Total capacity of all tables minus the party size of every arrival
    /// seated at a reserved table, computed as one aggregate.
    async fn count_seats_empty(&self) -> Result<i64>;
}

/// Everything the guestlist service needs from storage.
pub trait GuestlistStore: TableStore + ReservationStore + ArrivalStore {}

// Blanket implementation for any store providing all three capabilities
impl<T: TableStore + ReservationStore + ArrivalStore + ?Sized> GuestlistStore for T {}
