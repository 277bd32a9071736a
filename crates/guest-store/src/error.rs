use thiserror::Error;

use crate::{GuestName, TableNumber};

/// Errors that can occur when interacting with the guest store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A reservation for this guest already exists.
    #[error("Guest {0} already holds a reservation")]
    GuestAlreadyBooked(GuestName),

    /// Another reservation already references this table.
    #[error("Table {0} is already reserved")]
    TableAlreadyReserved(TableNumber),

    /// An arrival for this guest already exists.
    #[error("Guest {0} has already arrived")]
    GuestAlreadyArrived(GuestName),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for guest store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
