use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rolling_fingerprint::rolling_hash::{FingerprintSet, RollingHash};

const TEXT_SIZE: usize = 1 << 16;
const WINDOW_SIZE: usize = 32;

fn setup_text() -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0xF1A9);
    (0..TEXT_SIZE).map(|_| rng.gen()).collect()
}

fn bench_rolling_hash(c: &mut Criterion) {
    let text = setup_text();

    let mut group = c.benchmark_group("rolling_hash");

    group.bench_function(BenchmarkId::new("sweep", "rolled"), |b| {
        b.iter(|| {
            let rh = RollingHash::from_start(&text[..], WINDOW_SIZE).unwrap();
            let mut last = None;
            for fingerprint in rh {
                last = Some(fingerprint);
            }
            black_box(last)
        })
    });

    group.bench_function(BenchmarkId::new("sweep", "from_scratch"), |b| {
        b.iter(|| {
            let rh = RollingHash::from_start(&text[..], WINDOW_SIZE).unwrap();
            let mut last = None;
            for offset in 0..=TEXT_SIZE - WINDOW_SIZE {
                last = Some(rh.compute_hash(offset, WINDOW_SIZE));
            }
            black_box(last)
        })
    });

    group.bench_function(BenchmarkId::new("insert", "fingerprint_set"), |b| {
        b.iter(|| {
            let mut set = FingerprintSet::default();
            for fingerprint in RollingHash::from_start(&text[..], WINDOW_SIZE).unwrap() {
                set.insert(fingerprint);
            }
            black_box(set.len())
        })
    });

    group.finish();
}

criterion_group!(rolling_hash_benches, bench_rolling_hash);
criterion_main!(rolling_hash_benches);
