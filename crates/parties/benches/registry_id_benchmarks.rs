use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use supplierbook_parties::{compute_check_digits, RegistryId, SupplierDetails};

/// Deterministic set of valid IDs mixing numeric and alphanumeric bases.
fn sample_ids(count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    (0..count)
        .map(|i| {
            let base: String = (0..12)
                .map(|j| {
                    let idx = (i * 7 + j * 13) % ALPHABET.len();
                    char::from(ALPHABET[idx])
                })
                .collect();
            RegistryId::from_base(&base)
                .expect("generated base is well-formed")
                .into_string()
        })
        .collect()
}

fn bench_registry_id_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_id_validation");

    group.bench_function("valid_alphanumeric", |b| {
        b.iter(|| RegistryId::parse(black_box("A2345678901242")).unwrap());
    });

    group.bench_function("valid_numeric", |b| {
        b.iter(|| RegistryId::parse(black_box("11444777000142")).unwrap());
    });

    group.bench_function("check_digit_mismatch", |b| {
        b.iter(|| RegistryId::parse(black_box("A2345678901243")).unwrap_err());
    });

    group.bench_function("compute_check_digits", |b| {
        b.iter(|| compute_check_digits(black_box("A23456789012")).unwrap());
    });

    for size in [100usize, 1_000, 10_000] {
        let ids = sample_ids(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("batch", size), &ids, |b, ids| {
            b.iter(|| {
                for id in ids {
                    RegistryId::parse(black_box(id)).unwrap();
                }
            });
        });
    }

    group.finish();
}

fn bench_supplier_details(c: &mut Criterion) {
    c.bench_function("supplier_details_validate", |b| {
        b.iter(|| {
            SupplierDetails::validate(
                black_box("Acme Supplies"),
                black_box("a2345678901242"),
                black_box("eireli"),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_registry_id_validation, bench_supplier_details);
criterion_main!(benches);
