use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Arrival, GuestName, Reservation, Result, StoreError, Table, TableNumber,
    store::{ArrivalStore, ReservationStore, TableStore},
};

/// In-memory guest store.
///
/// Enforces the same uniqueness rules as the PostgreSQL schema, so it can
/// stand in for it in tests and in database-less deployments.
#[derive(Clone, Default)]
pub struct InMemoryGuestStore {
    tables: Arc<RwLock<BTreeMap<TableNumber, Table>>>,
    reservations: Arc<RwLock<Vec<Reservation>>>,
    arrivals: Arc<RwLock<Vec<Arrival>>>,
}

impl InMemoryGuestStore {
    /// Creates a new empty store with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given tables.
    pub fn with_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let tables = tables.into_iter().map(|t| (t.number, t)).collect();
        Self {
            tables: Arc::new(RwLock::new(tables)),
            ..Self::default()
        }
    }

    /// Inserts a table, replacing the capacity of an existing one.
    pub async fn seed_table(&self, table: Table) {
        self.tables.write().await.insert(table.number, table);
    }
}

#[async_trait]
impl TableStore for InMemoryGuestStore {
    async fn find_table(&self, number: TableNumber) -> Result<Option<Table>> {
        Ok(self.tables.read().await.get(&number).copied())
    }
}

#[async_trait]
impl ReservationStore for InMemoryGuestStore {
    async fn find_reservation_by_guest(&self, guest: &GuestName) -> Result<Option<Reservation>> {
        let store = self.reservations.read().await;
        Ok(store.iter().find(|r| &r.guest_name == guest).cloned())
    }

    async fn find_reservation_by_table(&self, number: TableNumber) -> Result<Option<Reservation>> {
        let store = self.reservations.read().await;
        Ok(store.iter().find(|r| r.table_number == number).cloned())
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>> {
        Ok(self.reservations.read().await.clone())
    }

    async fn insert_reservation(&self, reservation: Reservation) -> Result<()> {
        let mut store = self.reservations.write().await;

        // Unique constraint simulation
        if store.iter().any(|r| r.guest_name == reservation.guest_name) {
            return Err(StoreError::GuestAlreadyBooked(reservation.guest_name));
        }
        if store.iter().any(|r| r.table_number == reservation.table_number) {
            return Err(StoreError::TableAlreadyReserved(reservation.table_number));
        }

        store.push(reservation);
        Ok(())
    }

    async fn delete_reservation(&self, guest: &GuestName) -> Result<bool> {
        let mut store = self.reservations.write().await;
        let before = store.len();
        store.retain(|r| &r.guest_name != guest);
        Ok(store.len() != before)
    }
}

#[async_trait]
impl ArrivalStore for InMemoryGuestStore {
    async fn find_arrival(&self, guest: &GuestName) -> Result<Option<Arrival>> {
        let store = self.arrivals.read().await;
        Ok(store.iter().find(|a| &a.guest_name == guest).cloned())
    }

    async fn list_arrivals(&self) -> Result<Vec<Arrival>> {
        Ok(self.arrivals.read().await.clone())
    }

    async fn insert_arrival(&self, arrival: Arrival) -> Result<()> {
        let mut store = self.arrivals.write().await;
        if store.iter().any(|a| a.guest_name == arrival.guest_name) {
            return Err(StoreError::GuestAlreadyArrived(arrival.guest_name));
        }
        store.push(arrival);
        Ok(())
    }

    async fn delete_arrival(&self, guest: &GuestName) -> Result<bool> {
        let mut store = self.arrivals.write().await;
        let before = store.len();
        store.retain(|a| &a.guest_name != guest);
        Ok(store.len() != before)
    }

    async fn count_seats_empty(&self) -> Result<i64> {
        // Locks are always taken in this order to keep the view consistent.
        let tables = self.tables.read().await;
        let reservations = self.reservations.read().await;
        let arrivals = self.arrivals.read().await;

        // Same shape as the SQL aggregate: tables LEFT JOIN reservations LEFT JOIN arrivals.
        let seats = tables
            .values()
            .map(|table| {
                let occupied = reservations
                    .iter()
                    .filter(|r| r.table_number == table.number)
                    .flat_map(|r| arrivals.iter().filter(move |a| a.guest_name == r.guest_name))
                    .map(|a| i64::from(a.party_size()))
                    .sum::<i64>();
                i64::from(table.capacity) - occupied
            })
            .sum();

        Ok(seats)
    }
}
