use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labeled_sssp::graph::generators::{generate_random, vertex_label};
use labeled_sssp::{Strategy, Vertex};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_strategies");

    for &size in &[500usize, 2_000] {
        let graph = generate_random(size, size * 4, 100, 0xD1_5EED);
        let source = Vertex::from(vertex_label(0));

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.as_str(), size), &graph, |b, graph| {
                b.iter(|| strategy.run(black_box(graph), &source).map(|r| r.reachable_count()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
