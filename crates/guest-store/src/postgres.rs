use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Arrival, GuestName, Reservation, Result, StoreError, Table, TableNumber,
    store::{ArrivalStore, ReservationStore, TableStore},
};

const UNIQUE_RESERVATION_GUEST: &str = "unique_reservation_guest";
const UNIQUE_RESERVATION_TABLE: &str = "unique_reservation_table";
const UNIQUE_ARRIVAL_GUEST: &str = "unique_arrival_guest";

/// PostgreSQL-backed guest store implementation.
#[derive(Clone)]
pub struct PostgresGuestStore {
    pool: PgPool,
}

impl PostgresGuestStore {
    /// Creates a new PostgreSQL guest store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Inserts a table, replacing the capacity of an existing one.
    pub async fn seed_table(&self, table: Table) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO venue_tables (table_number, capacity)
            VALUES ($1, $2)
            ON CONFLICT (table_number) DO UPDATE SET capacity = EXCLUDED.capacity
            "#,
        )
        .bind(table.number.as_i32())
        .bind(table.capacity)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_reservation(row: PgRow) -> Result<Reservation> {
        Ok(Reservation {
            guest_name: GuestName::new(row.try_get::<String, _>("guest_name")?),
            table_number: TableNumber::new(row.try_get("table_number")?),
            accompanying_guests: row.try_get("accompanying_guests")?,
        })
    }

    fn row_to_arrival(row: PgRow) -> Result<Arrival> {
        Ok(Arrival {
            guest_name: GuestName::new(row.try_get::<String, _>("guest_name")?),
            accompanying_guests: row.try_get("accompanying_guests")?,
            arrived_at: row.try_get("arrived_at")?,
        })
    }
}

/// Returns the name of the violated constraint, if the error is one.
fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => db_err.constraint(),
        _ => None,
    }
}

#[async_trait]
impl TableStore for PostgresGuestStore {
    async fn find_table(&self, number: TableNumber) -> Result<Option<Table>> {
        let row: Option<PgRow> =
            sqlx::query("SELECT table_number, capacity FROM venue_tables WHERE table_number = $1")
                .bind(number.as_i32())
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => Ok(Some(Table {
                number: TableNumber::new(row.try_get("table_number")?),
                capacity: row.try_get("capacity")?,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ReservationStore for PostgresGuestStore {
    async fn find_reservation_by_guest(&self, guest: &GuestName) -> Result<Option<Reservation>> {
        let row = sqlx::query(
            r#"
            SELECT guest_name, table_number, accompanying_guests
            FROM reservations
            WHERE guest_name = $1
            "#,
        )
        .bind(guest.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_reservation).transpose()
    }

    async fn find_reservation_by_table(&self, number: TableNumber) -> Result<Option<Reservation>> {
        let row = sqlx::query(
            r#"
            SELECT guest_name, table_number, accompanying_guests
            FROM reservations
            WHERE table_number = $1
            "#,
        )
        .bind(number.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_reservation).transpose()
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>> {
        let rows = sqlx::query(
            r#"
            SELECT guest_name, table_number, accompanying_guests
            FROM reservations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_reservation).collect()
    }

    async fn insert_reservation(&self, reservation: Reservation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reservations (guest_name, table_number, accompanying_guests)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(reservation.guest_name.as_str())
        .bind(reservation.table_number.as_i32())
        .bind(reservation.accompanying_guests)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Losing side of a concurrent booking
            match violated_constraint(&e) {
                Some(UNIQUE_RESERVATION_GUEST) => {
                    return StoreError::GuestAlreadyBooked(reservation.guest_name.clone());
                }
                Some(UNIQUE_RESERVATION_TABLE) => {
                    return StoreError::TableAlreadyReserved(reservation.table_number);
                }
                _ => {}
            }
            StoreError::Database(e)
        })?;

        tracing::debug!(
            guest = %reservation.guest_name,
            table = %reservation.table_number,
            "reservation stored"
        );
        Ok(())
    }

    async fn delete_reservation(&self, guest: &GuestName) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE guest_name = $1")
            .bind(guest.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArrivalStore for PostgresGuestStore {
    async fn find_arrival(&self, guest: &GuestName) -> Result<Option<Arrival>> {
        let row = sqlx::query(
            r#"
            SELECT guest_name, accompanying_guests, arrived_at
            FROM arrivals
            WHERE guest_name = $1
            "#,
        )
        .bind(guest.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_arrival).transpose()
    }

    async fn list_arrivals(&self) -> Result<Vec<Arrival>> {
        let rows = sqlx::query(
            r#"
            SELECT guest_name, accompanying_guests, arrived_at
            FROM arrivals
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_arrival).collect()
    }

    async fn insert_arrival(&self, arrival: Arrival) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO arrivals (guest_name, accompanying_guests, arrived_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(arrival.guest_name.as_str())
        .bind(arrival.accompanying_guests)
        .bind(arrival.arrived_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e) == Some(UNIQUE_ARRIVAL_GUEST) {
                return StoreError::GuestAlreadyArrived(arrival.guest_name.clone());
            }
            StoreError::Database(e)
        })?;

        tracing::debug!(guest = %arrival.guest_name, "arrival stored");
        Ok(())
    }

    async fn delete_arrival(&self, guest: &GuestName) -> Result<bool> {
        let result = sqlx::query("DELETE FROM arrivals WHERE guest_name = $1")
            .bind(guest.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_seats_empty(&self) -> Result<i64> {
        let seats: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(t.capacity - COALESCE(a.accompanying_guests + 1, 0)), 0)::BIGINT
            FROM venue_tables t
            LEFT JOIN reservations r ON t.table_number = r.table_number
            LEFT JOIN arrivals a ON r.guest_name = a.guest_name
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(seats)
    }
}
