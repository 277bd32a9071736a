//! Domain error types.

use guest_store::StoreError;
use thiserror::Error;

use crate::guestlist::GuestlistError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A booking or attendance rule was violated.
    #[error("Guestlist error: {0}")]
    Guestlist(GuestlistError),

    /// The store failed for a reason unrelated to the guestlist rules.
    #[error("Store error: {0}")]
    Store(#[source] StoreError),
}

impl DomainError {
    /// Returns the rule violation, if this error is one.
    pub fn kind(&self) -> Option<GuestlistError> {
        match self {
            DomainError::Guestlist(kind) => Some(*kind),
            DomainError::Store(_) => None,
        }
    }
}

impl From<GuestlistError> for DomainError {
    fn from(e: GuestlistError) -> Self {
        DomainError::Guestlist(e)
    }
}

/// Uniqueness violations reported by the store are the same rule violations
/// the service checks for up front, raised by a concurrent writer.
impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::GuestAlreadyBooked(_) => GuestlistError::GuestBookedAlready.into(),
            StoreError::TableAlreadyReserved(_) => GuestlistError::TableNotAvailable.into(),
            StoreError::GuestAlreadyArrived(_) => GuestlistError::GuestHasAlreadyArrived.into(),
            other => DomainError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use guest_store::{GuestName, TableNumber};

    use super::*;

    #[test]
    fn uniqueness_violations_fold_into_rule_violations() {
        let cases = [
            (
                StoreError::GuestAlreadyBooked(GuestName::from("A")),
                GuestlistError::GuestBookedAlready,
            ),
            (
                StoreError::TableAlreadyReserved(TableNumber::new(1)),
                GuestlistError::TableNotAvailable,
            ),
            (
                StoreError::GuestAlreadyArrived(GuestName::from("A")),
                GuestlistError::GuestHasAlreadyArrived,
            ),
        ];

        for (store_err, expected) in cases {
            assert_eq!(DomainError::from(store_err).kind(), Some(expected));
        }
    }

    #[test]
    fn database_errors_stay_unclassified() {
        let err = DomainError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, DomainError::Store(StoreError::Database(_))));
        assert_eq!(err.kind(), None);
    }
}
