//! Benchmark for the full recomputation pass: the engine re-reads both
//! tables on every mutation, so this is the hot path at scale.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use causeway_core::entity::{Cause, IdList, Outcome};
use causeway_core::traits::IEntityStore;
use causeway_engine::aggregate;
use causeway_storage::SqliteStore;

/// Seed `causes` cause rows and `outcomes` outcome rows, each outcome fed
/// by a fixed fan-in of 8 causes.
fn seed(causes: usize, outcomes: usize) -> Arc<SqliteStore> {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    for i in 0..causes {
        store
            .append_cause(&Cause {
                id: format!("c{i}"),
                title: format!("Cause {i}"),
                description: String::new(),
                caused_by: IdList::new(),
                causes: IdList::new(),
                probability: Some((i % 101) as i64),
                severity: Some((i % 10 + 1) as i64),
            })
            .unwrap();
    }
    for i in 0..outcomes {
        let caused_by: IdList = (0..8)
            .map(|k| format!("c{}", (i * 7 + k * 13) % causes))
            .collect();
        store
            .append_outcome(&Outcome {
                id: format!("o{i}"),
                title: format!("Outcome {i}"),
                description: String::new(),
                caused_by,
                probability: 0.0,
                severity: 0,
            })
            .unwrap();
    }
    store
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_all");
    for &(causes, outcomes) in &[(50, 10), (200, 50), (500, 100)] {
        let store = seed(causes, outcomes);
        // Settle once so the measured passes are the idempotent steady state.
        aggregate::recompute_all(store.as_ref()).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{causes}c/{outcomes}o")),
            &store,
            |b, store| b.iter(|| aggregate::recompute_all(store.as_ref()).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
