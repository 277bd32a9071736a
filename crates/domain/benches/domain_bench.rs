use criterion::{Criterion, criterion_group, criterion_main};
use domain::{BookTable, CheckIn, CheckOut, GuestlistService};
use guest_store::{InMemoryGuestStore, Table};

fn venue(tables: i32) -> InMemoryGuestStore {
    InMemoryGuestStore::with_tables((1..=tables).map(|n| Table::new(n, 10)))
}

fn bench_book_table(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/book_table", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = GuestlistService::new(venue(1));
                service
                    .book_table(BookTable::new("Bench Guest", 1, 4))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_attendance_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = GuestlistService::new(venue(1));
    rt.block_on(async {
        service
            .book_table(BookTable::new("Bench Guest", 1, 4))
            .await
            .unwrap()
    });

    c.bench_function("domain/check_in_check_out", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .check_guest_in(CheckIn::new("Bench Guest", 4))
                    .await
                    .unwrap();
                service
                    .check_guest_out(CheckOut::new("Bench Guest"))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_seats_empty_full_venue(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = GuestlistService::new(venue(200));
    rt.block_on(async {
        for n in 1..=200 {
            let guest = format!("Guest {n}");
            service
                .book_table(BookTable::new(guest.as_str(), n, 3))
                .await
                .unwrap();
            if n % 2 == 0 {
                service
                    .check_guest_in(CheckIn::new(guest.as_str(), 5))
                    .await
                    .unwrap();
            }
        }
    });

    c.bench_function("domain/seats_empty_200_tables", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.get_seats_empty().await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_book_table,
    bench_attendance_cycle,
    bench_seats_empty_full_venue
);
criterion_main!(benches);
