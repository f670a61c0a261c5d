//! Benchmark – `runeflip::reverse`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Produce a deterministic payload of exactly `target_len` bytes built from
/// `unit` repeated, padded with ASCII where `unit` does not divide evenly.
fn make_payload(unit: &str, target_len: usize) -> String {
    let mut s = String::with_capacity(target_len);
    while s.len() + unit.len() <= target_len {
        s.push_str(unit);
    }
    s.extend(std::iter::repeat_n('a', target_len - s.len()));
    debug_assert_eq!(s.len(), target_len);
    s
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for &size in &[64usize, 4 * 1024, 256 * 1024] {
        for (name, unit) in [("ascii", "a"), ("cjk", "語"), ("emoji", "🦀")] {
            let payload = make_payload(unit, size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &payload, |b, p| {
                b.iter(|| black_box(runeflip::reverse(black_box(p.as_bytes())).is_ok()));
            });
        }

        let mut invalid = make_payload("語", size).into_bytes();
        if let Some(last) = invalid.last_mut() {
            *last = 0xff;
        }
        group.bench_with_input(BenchmarkId::new("rejected", size), &invalid, |b, p| {
            b.iter(|| black_box(runeflip::reverse(black_box(p.as_slice())).is_err()));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_reverse }
criterion_main!(benches);
