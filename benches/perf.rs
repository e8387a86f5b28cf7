use criterion::{criterion_group, criterion_main, Criterion};
use stringid::Pool;

fn bench_pool_suites(c: &mut Criterion) {
    // --- Group 1: Create ---
    let mut g1 = c.benchmark_group("Create");

    g1.bench_function("create_short_string", |b| {
        let mut pool = Pool::new();
        b.iter(|| {
            pool.create(b"Hello World").unwrap();
        });
    });

    g1.bench_function("create_long_string", |b| {
        let mut pool = Pool::new();
        let payload = vec![b'y'; 200];
        b.iter(|| {
            pool.create(&payload).unwrap();
        });
    });
    g1.finish();

    // --- Group 2: Clone / Release ---
    let mut g2 = c.benchmark_group("Clone-Release");

    g2.bench_function("clone_then_release", |b| {
        let mut pool = Pool::new();
        let id = pool.create(b"clone target").unwrap();
        b.iter(|| {
            let cloned = pool.clone_id(id).unwrap();
            pool.release(cloned);
        });
    });

    g2.bench_function("create_then_release", |b| {
        let mut pool = Pool::new();
        b.iter(|| {
            let id = pool.create(b"ephemeral").unwrap();
            pool.release(id);
        });
    });
    g2.finish();

    // --- Group 3: Read / Compare ---
    let mut g3 = c.benchmark_group("Read-Compare");

    g3.bench_function("read_contiguous", |b| {
        let mut pool = Pool::new();
        let id = pool.create(b"abcdefghijklmno").unwrap();
        b.iter(|| {
            let _ = pool.read(id);
        });
    });

    g3.bench_function("eq_match", |b| {
        let mut pool = Pool::new();
        let id = pool.create(b"Hello World").unwrap();
        b.iter(|| {
            pool.eq(id, b"Hello World");
        });
    });
    g3.finish();
}

criterion_group!(benches, bench_pool_suites);
criterion_main!(benches);
