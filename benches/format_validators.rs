use criterion::{Criterion, black_box, criterion_group, criterion_main};
use validus::combinators::ForString;
use validus::prelude::*;

fn bench_checksums(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksums");

    let card = credit_card();
    group.bench_function("credit_card", |b| {
        b.iter(|| card.is_valid(black_box("4539 1488 0343 6467")));
    });

    let isbn = isbn13();
    group.bench_function("isbn13", |b| {
        b.iter(|| isbn.is_valid(black_box("978-0-306-40615-7")));
    });

    group.finish();
}

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("formats");

    let uuid = uuid_version(4);
    group.bench_function("uuid_v4", |b| {
        b.iter(|| uuid.is_valid(black_box("550e8400-e29b-41d4-a716-446655440000")));
    });

    let v6 = ipv6();
    group.bench_function("ipv6_compressed", |b| {
        b.iter(|| v6.is_valid(black_box("2001:db8::8a2e:370:7334")));
    });

    let mail = email();
    group.bench_function("email", |b| {
        b.iter(|| mail.is_valid(black_box("user.name+tag@example.co.uk")));
    });

    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");

    let registry = Registry::with_defaults();
    group.bench_function("registry_make", |b| {
        b.iter(|| registry.make(black_box(TypeTag::String)).unwrap());
    });

    let lifted = ForString::new(min_length(3).and(max_length(64)).and(email()));
    let value = Value::from("user@example.com");
    group.bench_function("report_evaluate", |b| {
        b.iter(|| Report::evaluate(&lifted, black_box(value.clone())));
    });

    group.finish();
}

criterion_group!(benches, bench_checksums, bench_formats, bench_dynamic);
criterion_main!(benches);
