//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency and are
//! serialized because every test truncates the shared tables.
//! Run with:
//!
//! ```bash
//! cargo test -p guest-store --test postgres_integration
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use guest_store::{
    Arrival, ArrivalStore, GuestName, PostgresGuestStore, Reservation, ReservationStore,
    StoreError, Table, TableNumber, TableStore,
};
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for migrations
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_guestlist_tables.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool, cleared tables and two seeded tables
async fn get_test_store() -> PostgresGuestStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE venue_tables, reservations, arrivals")
        .execute(&pool)
        .await
        .unwrap();

    let store = PostgresGuestStore::new(pool);
    store.seed_table(Table::new(1, 10)).await.unwrap();
    store.seed_table(Table::new(2, 5)).await.unwrap();
    store
}

fn arrival_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2022-05-04T20:20:20Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
#[serial]
async fn find_seeded_table() {
    let store = get_test_store().await;

    let table = store.find_table(TableNumber::new(1)).await.unwrap();
    assert_eq!(table, Some(Table::new(1, 10)));

    let missing = store.find_table(TableNumber::new(99998)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[serial]
async fn seed_table_is_an_upsert() {
    let store = get_test_store().await;
    store.seed_table(Table::new(1, 4)).await.unwrap();

    let table = store.find_table(TableNumber::new(1)).await.unwrap().unwrap();
    assert_eq!(table.capacity, 4);
}

#[tokio::test]
#[serial]
async fn insert_and_find_reservation() {
    let store = get_test_store().await;
    store
        .insert_reservation(Reservation::new("Test Guest", 1, 8))
        .await
        .unwrap();

    let by_guest = store
        .find_reservation_by_guest(&GuestName::from("Test Guest"))
        .await
        .unwrap();
    assert_eq!(by_guest, Some(Reservation::new("Test Guest", 1, 8)));

    let by_table = store
        .find_reservation_by_table(TableNumber::new(1))
        .await
        .unwrap();
    assert_eq!(by_table, by_guest);
}

#[tokio::test]
#[serial]
async fn unique_guest_constraint_maps_to_store_error() {
    let store = get_test_store().await;
    store
        .insert_reservation(Reservation::new("Test Guest", 1, 8))
        .await
        .unwrap();

    let result = store
        .insert_reservation(Reservation::new("Test Guest", 2, 1))
        .await;
    assert!(matches!(result, Err(StoreError::GuestAlreadyBooked(_))));
}

#[tokio::test]
#[serial]
async fn unique_table_constraint_maps_to_store_error() {
    let store = get_test_store().await;
    store
        .insert_reservation(Reservation::new("Test Guest", 1, 8))
        .await
        .unwrap();

    let result = store
        .insert_reservation(Reservation::new("Another Test Guest", 1, 1))
        .await;
    assert!(matches!(result, Err(StoreError::TableAlreadyReserved(_))));
}

#[tokio::test]
#[serial]
async fn reservations_listed_in_insertion_order() {
    let store = get_test_store().await;
    store
        .insert_reservation(Reservation::new("Zoe", 2, 0))
        .await
        .unwrap();
    store
        .insert_reservation(Reservation::new("Adam", 1, 0))
        .await
        .unwrap();

    let listed = store.list_reservations().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].guest_name.as_str(), "Zoe");
    assert_eq!(listed[1].guest_name.as_str(), "Adam");
}

#[tokio::test]
#[serial]
async fn delete_reservation() {
    let store = get_test_store().await;
    let guest = GuestName::from("Test Guest");
    store
        .insert_reservation(Reservation::new("Test Guest", 1, 8))
        .await
        .unwrap();

    assert!(store.delete_reservation(&guest).await.unwrap());
    assert!(!store.delete_reservation(&guest).await.unwrap());
    assert!(
        store
            .find_reservation_by_guest(&guest)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[serial]
async fn arrival_round_trip_preserves_timestamp() {
    let store = get_test_store().await;
    store
        .insert_arrival(Arrival::new("Test Guest", 8, arrival_time()))
        .await
        .unwrap();

    let arrival = store
        .find_arrival(&GuestName::from("Test Guest"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(arrival.accompanying_guests, 8);
    assert_eq!(arrival.arrived_at, arrival_time());

    let all = store.list_arrivals().await.unwrap();
    assert_eq!(all, vec![arrival]);
}

#[tokio::test]
#[serial]
async fn unique_arrival_constraint_maps_to_store_error() {
    let store = get_test_store().await;
    store
        .insert_arrival(Arrival::new("Test Guest", 8, arrival_time()))
        .await
        .unwrap();

    let result = store
        .insert_arrival(Arrival::new("Test Guest", 2, arrival_time()))
        .await;
    assert!(matches!(result, Err(StoreError::GuestAlreadyArrived(_))));
}

#[tokio::test]
#[serial]
async fn delete_arrival() {
    let store = get_test_store().await;
    let guest = GuestName::from("Test Guest");
    store
        .insert_arrival(Arrival::new("Test Guest", 8, arrival_time()))
        .await
        .unwrap();

    assert!(store.delete_arrival(&guest).await.unwrap());
    assert!(!store.delete_arrival(&guest).await.unwrap());
}

#[tokio::test]
#[serial]
async fn seats_empty_counts_full_capacity_without_arrivals() {
    let store = get_test_store().await;
    store
        .insert_reservation(Reservation::new("Test Guest", 1, 8))
        .await
        .unwrap();

    assert_eq!(store.count_seats_empty().await.unwrap(), 15);
}

#[tokio::test]
#[serial]
async fn seats_empty_subtracts_arrived_parties() {
    let store = get_test_store().await;
    store
        .insert_reservation(Reservation::new("Test Guest", 1, 8))
        .await
        .unwrap();
    store
        .insert_reservation(Reservation::new("Another Test Guest", 2, 1))
        .await
        .unwrap();
    store
        .insert_arrival(Arrival::new("Test Guest", 6, arrival_time()))
        .await
        .unwrap();
    store
        .insert_arrival(Arrival::new("Another Test Guest", 1, arrival_time()))
        .await
        .unwrap();

    assert_eq!(store.count_seats_empty().await.unwrap(), 15 - 7 - 2);
}

#[tokio::test]
#[serial]
async fn seats_empty_with_no_tables_is_zero() {
    let store = get_test_store().await;
    sqlx::query("TRUNCATE TABLE venue_tables")
        .execute(store.pool())
        .await
        .unwrap();

    assert_eq!(store.count_seats_empty().await.unwrap(), 0);
}
