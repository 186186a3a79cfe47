//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure:
//! - Case-insensitive lookup in books of different sizes
//! - Phone membership checks on records with many numbers

use contact_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts, each with two phone numbers.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact {}", i));
        record
            .add_phone(&format!("{:010}", i))
            .expect("generated phone is valid");
        record
            .add_phone(&format!("{:010}", i + size))
            .expect("generated phone is valid");
        book.add_record(record).expect("generated names are unique");
    }
    book
}

/// Benchmark lookup by name across dataset sizes.
fn bench_find_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_size");

    for size in [10, 100, 1000, 10000].iter() {
        let book = create_test_book(*size);
        let name = format!("CONTACT {}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| book.find(black_box(&name)).is_ok());
        });
    }

    group.finish();
}

/// Benchmark linear phone search on a single record.
fn bench_find_phone(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_phone");

    for count in [1, 10, 100].iter() {
        let mut record = Record::new("Alice");
        for i in 0..*count {
            record
                .add_phone(&format!("{:010}", i))
                .expect("generated phone is valid");
        }
        let last = format!("{:010}", count - 1);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| matches!(record.find_phone(black_box(&last)), Ok(Some(_))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_by_size, bench_find_phone);
criterion_main!(benches);
