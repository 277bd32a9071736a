//! Guestlist service enforcing the booking and attendance rules.

use std::sync::Arc;

use common::GuestName;
use guest_store::{Arrival, GuestlistStore, Reservation, Table};

use crate::clock::{Clock, SystemClock};
use crate::error::DomainError;

use super::{ArrivedGuest, BookTable, CheckIn, CheckOut, Guest, GuestlistError};

/// Service for managing the guestlist.
///
/// Every operation is a fixed sequence of store reads followed by at most one
/// write. The checks run in a fixed order so that when several rules are
/// broken at once the reported error is deterministic.
pub struct GuestlistService<S: GuestlistStore> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: GuestlistStore> GuestlistService<S> {
    /// Creates a new guestlist service stamping arrivals with wall-clock time.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a new guestlist service with a custom clock.
    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Books a table for a guest.
    ///
    /// The table must exist, the guest must not already hold a reservation,
    /// the table must not be reserved, and the party must fit. Returns the
    /// guest's name.
    #[tracing::instrument(skip(self))]
    pub async fn book_table(&self, cmd: BookTable) -> Result<GuestName, DomainError> {
        let result = self.try_book_table(cmd).await;
        match &result {
            Ok(guest) => {
                metrics::counter!("guestlist_bookings_total").increment(1);
                tracing::info!(%guest, "table booked");
            }
            Err(e) => record_rejection(e),
        }
        result
    }

    async fn try_book_table(&self, cmd: BookTable) -> Result<GuestName, DomainError> {
        let table = self
            .store
            .find_table(cmd.table_number)
            .await?
            .ok_or(GuestlistError::TableNotFound)?;

        if self
            .store
            .find_reservation_by_guest(&cmd.guest_name)
            .await?
            .is_some()
        {
            return Err(GuestlistError::GuestBookedAlready.into());
        }

        if self
            .store
            .find_reservation_by_table(cmd.table_number)
            .await?
            .is_some()
        {
            return Err(GuestlistError::TableNotAvailable.into());
        }

        ensure_fits(&table, cmd.accompanying_guests)?;

        self.store
            .insert_reservation(Reservation {
                guest_name: cmd.guest_name.clone(),
                table_number: cmd.table_number,
                accompanying_guests: cmd.accompanying_guests,
            })
            .await?;

        Ok(cmd.guest_name)
    }

    /// Returns every reservation on the guestlist.
    #[tracing::instrument(skip(self))]
    pub async fn get_guestlist(&self) -> Result<Vec<Guest>, DomainError> {
        let reservations = self.store.list_reservations().await?;
        Ok(reservations.into_iter().map(Guest::from).collect())
    }

    /// Checks a guest in with the entourage they actually arrived with.
    ///
    /// The guest needs a reservation and must not be in the venue already.
    /// The entourage is validated against the reserved table's capacity
    /// again, independently of the count given at booking time.
    #[tracing::instrument(skip(self))]
    pub async fn check_guest_in(&self, cmd: CheckIn) -> Result<GuestName, DomainError> {
        let result = self.try_check_guest_in(cmd).await;
        match &result {
            Ok(guest) => {
                metrics::counter!("guestlist_check_ins_total").increment(1);
                tracing::info!(%guest, "guest checked in");
            }
            Err(e) => record_rejection(e),
        }
        result
    }

    async fn try_check_guest_in(&self, cmd: CheckIn) -> Result<GuestName, DomainError> {
        let reservation = self
            .store
            .find_reservation_by_guest(&cmd.guest_name)
            .await?
            .ok_or(GuestlistError::ReservationNotFound)?;

        if self.store.find_arrival(&cmd.guest_name).await?.is_some() {
            return Err(GuestlistError::GuestHasAlreadyArrived.into());
        }

        // Only reachable if a reservation points at a table that was removed.
        let table = match self.store.find_table(reservation.table_number).await? {
            Some(table) => table,
            None => {
                tracing::warn!(
                    guest = %cmd.guest_name,
                    table = %reservation.table_number,
                    "reservation references a missing table"
                );
                return Err(GuestlistError::TableNotFound.into());
            }
        };

        ensure_fits(&table, cmd.accompanying_guests)?;

        self.store
            .insert_arrival(Arrival {
                guest_name: cmd.guest_name.clone(),
                accompanying_guests: cmd.accompanying_guests,
                arrived_at: self.clock.now(),
            })
            .await?;

        Ok(cmd.guest_name)
    }

    /// Returns every guest currently in the venue.
    #[tracing::instrument(skip(self))]
    pub async fn get_arrived_guests(&self) -> Result<Vec<ArrivedGuest>, DomainError> {
        let arrivals = self.store.list_arrivals().await?;
        Ok(arrivals.into_iter().map(ArrivedGuest::from).collect())
    }

    /// Checks a guest out, removing their arrival but keeping the reservation.
    #[tracing::instrument(skip(self))]
    pub async fn check_guest_out(&self, cmd: CheckOut) -> Result<(), DomainError> {
        let result = self.try_check_guest_out(&cmd).await;
        match &result {
            Ok(()) => {
                metrics::counter!("guestlist_check_outs_total").increment(1);
                tracing::info!(guest = %cmd.guest_name, "guest checked out");
            }
            Err(e) => record_rejection(e),
        }
        result
    }

    async fn try_check_guest_out(&self, cmd: &CheckOut) -> Result<(), DomainError> {
        self.store
            .find_reservation_by_guest(&cmd.guest_name)
            .await?
            .ok_or(GuestlistError::ReservationNotFound)?;

        // A concurrent check-out may remove the row between the lookup and
        // the delete; that is still a guest who is no longer in the venue.
        self.store
            .find_arrival(&cmd.guest_name)
            .await?
            .ok_or(GuestlistError::GuestNotCheckedIn)?;

        if !self.store.delete_arrival(&cmd.guest_name).await? {
            return Err(GuestlistError::GuestNotCheckedIn.into());
        }

        Ok(())
    }

    /// Counts the seats currently empty across all tables.
    #[tracing::instrument(skip(self))]
    pub async fn get_seats_empty(&self) -> Result<i64, DomainError> {
        Ok(self.store.count_seats_empty().await?)
    }
}

/// The table must seat the guest plus their entourage.
fn ensure_fits(table: &Table, accompanying_guests: i32) -> Result<(), GuestlistError> {
    if table.capacity <= accompanying_guests {
        return Err(GuestlistError::TableCapacityExceeded);
    }
    Ok(())
}

/// Counts rule violations. Store failures are logged where they are answered.
fn record_rejection(err: &DomainError) {
    if let Some(kind) = err.kind() {
        metrics::counter!("guestlist_rejections_total", "reason" => kind.code()).increment(1);
        tracing::debug!(reason = kind.code(), "request rejected");
    }
}
