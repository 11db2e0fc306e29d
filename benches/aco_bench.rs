//! Criterion benchmarks for the ACO engine.
//!
//! Measures batch generation and the evaporation update over growing
//! complete graphs, independent of any domain data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aco_engine::{AcoConfig, AcoEngine, AcoRunner, Graph, PheromoneUpdater};

fn bench_generate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch");
    group.sample_size(10);

    for &(n, tours) in &[(10usize, 20usize), (25, 50), (50, 50)] {
        let graph = Graph::complete(n);
        let config = AcoConfig::default().with_seed(42);

        group.bench_with_input(
            BenchmarkId::new(format!("n{}_t{}", n, tours), n),
            &(graph, config),
            |b, (graph, config)| {
                b.iter(|| {
                    let batch =
                        AcoRunner::generate_batch(black_box(graph), black_box(config), tours)
                            .unwrap();
                    black_box(batch)
                })
            },
        );
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    group.sample_size(10);

    for &n in &[10usize, 25, 50] {
        let config = AcoConfig::default().with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut graph = Graph::complete(n);
                let mut batch = AcoRunner::generate_batch(&graph, &config, 20).unwrap();
                let reports =
                    PheromoneUpdater::update(&mut graph, &config, &mut batch).unwrap();
                black_box(reports)
            })
        });
    }
    group.finish();
}

fn bench_full_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_round");
    group.sample_size(10);

    for &n in &[10usize, 25] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let config = AcoConfig::default().with_seed(42);
                let mut engine = AcoEngine::standard(n, config).unwrap();
                let batch = engine.generate_batch(20).unwrap();
                let reports = engine.update(batch).unwrap();
                black_box(reports)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_batch, bench_update, bench_full_round);
criterion_main!(benches);
