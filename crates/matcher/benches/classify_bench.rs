use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matcher::{classify, FingerprintRecord, DEFAULT_NEAR_THRESHOLD};
use phash::Fingerprint;

// Deterministic scramble so every record gets a distinct fingerprint.
fn scramble(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn synthetic_fingerprint(i: u64) -> Fingerprint {
    Fingerprint::parse(&format!("{:016x}", scramble(i))).expect("valid hex")
}

fn bench_classify(c: &mut Criterion) {
    let query = synthetic_fingerprint(u64::MAX);
    let mut group = c.benchmark_group("classify");

    for size in [16u64, 256, 4096] {
        let index: Vec<FingerprintRecord<u64>> = (0..size)
            .map(|i| FingerprintRecord::new(synthetic_fingerprint(i), i))
            .collect();
        group.throughput(Throughput::Elements(size));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                classify(
                    black_box(&query),
                    black_box(&index),
                    DEFAULT_NEAR_THRESHOLD,
                )
                .expect("classify")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
