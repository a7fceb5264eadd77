use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

// Import the directory and the reference stores from the crate
use staffstore::directory::baseline::{LinkedHashMapStore, RecordStore, StdHashMapStore};
use staffstore::{Employee, EmployeeDirectory};

// Workload size
const RECORD_COUNT: usize = 10_000;

// Record ids in a shuffled but reproducible order
fn shuffled_ids(seed: u64) -> Vec<u32> {
    let mut ids: Vec<u32> = (0..RECORD_COUNT as u32).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    ids.shuffle(&mut rng);
    ids
}

fn fill<S: RecordStore>(store: &mut S, ids: &[u32]) {
    for &id in ids {
        store.put(Employee::basic(id, "bench"));
    }
}

// Benchmark insertions for each store
pub fn bench_insertions(c: &mut Criterion) {
    let ids = shuffled_ids(7);
    let mut group = c.benchmark_group("Insertions");

    group.bench_function("EmployeeDirectory", |b| {
        b.iter(|| {
            let mut store = EmployeeDirectory::new();
            fill(&mut store, &ids);
            black_box(store.count())
        });
    });

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut store = StdHashMapStore::new();
            fill(&mut store, &ids);
            black_box(store.count())
        });
    });

    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            let mut store = LinkedHashMapStore::new();
            fill(&mut store, &ids);
            black_box(store.count())
        });
    });

    group.finish();
}

// Benchmark lookups over a populated store for each store
pub fn bench_lookups(c: &mut Criterion) {
    let ids = shuffled_ids(11);
    let mut group = c.benchmark_group("Lookups");

    let mut directory = EmployeeDirectory::new();
    fill(&mut directory, &ids);
    group.bench_function("EmployeeDirectory", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &id in &ids {
                if directory.fetch(id).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    let mut std_store = StdHashMapStore::new();
    fill(&mut std_store, &ids);
    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &id in &ids {
                if std_store.fetch(id).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    let mut linked_store = LinkedHashMapStore::new();
    fill(&mut linked_store, &ids);
    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &id in &ids {
                if linked_store.fetch(id).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    group.finish();
}

// Benchmark an insert-lookup-evict cycle for each store
pub fn bench_mixed_workload(c: &mut Criterion) {
    let ids = shuffled_ids(13);
    let mut group = c.benchmark_group("MixedWorkload");

    group.bench_function("EmployeeDirectory", |b| {
        b.iter(|| {
            let mut store = EmployeeDirectory::new();
            fill(&mut store, &ids);
            for &id in &ids {
                black_box(store.fetch(id).is_some());
            }
            for &id in &ids {
                store.evict(id);
            }
            black_box(store.count())
        });
    });

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut store = StdHashMapStore::new();
            fill(&mut store, &ids);
            for &id in &ids {
                black_box(store.fetch(id).is_some());
            }
            for &id in &ids {
                store.evict(id);
            }
            black_box(store.count())
        });
    });

    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            let mut store = LinkedHashMapStore::new();
            fill(&mut store, &ids);
            for &id in &ids {
                black_box(store.fetch(id).is_some());
            }
            for &id in &ids {
                store.evict(id);
            }
            black_box(store.count())
        });
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_insertions, bench_lookups, bench_mixed_workload);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
