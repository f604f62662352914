//! Criterion benchmarks for pathspan.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use pathspan::graph::{bellman_ford, dijkstra, kruskal, prim, GraphBuilder, WeightedGraph};

/// Build a random connected graph with non-negative weights.
fn make_graph(node_count: usize, edges_per_node: usize) -> WeightedGraph {
    let mut rng = rand::thread_rng();
    let ids: Vec<String> = (0..node_count).map(|i| format!("n{}", i)).collect();

    let mut builder = GraphBuilder::new();
    for id in &ids {
        builder.add_node(id);
    }
    for i in 1..node_count {
        let j = rng.gen_range(0..i);
        builder.link(&ids[i], &ids[j], rng.gen_range(0.1..10.0));
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            if target != i {
                builder.link(&ids[i], &ids[target], rng.gen_range(0.1..10.0));
            }
        }
    }
    builder.build().unwrap()
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    for &n in &[100usize, 1_000, 10_000] {
        let graph = make_graph(n, 4);
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| dijkstra(black_box(g), "n0").unwrap())
        });
    }
    // Bellman-Ford is O(V * E); keep it to the smaller sizes
    for &n in &[100usize, 1_000] {
        let graph = make_graph(n, 4);
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| bellman_ford(black_box(g), "n0").unwrap())
        });
    }
    group.finish();
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_trees");
    for &n in &[100usize, 1_000, 10_000] {
        let graph = make_graph(n, 4);
        group.bench_with_input(BenchmarkId::new("prim", n), &graph, |b, g| {
            b.iter(|| prim(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, g| {
            b.iter(|| kruskal(black_box(g)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_graph_1k", |b| b.iter(|| make_graph(1_000, 4)));
}

criterion_group!(benches, bench_shortest_paths, bench_spanning_trees, bench_build);
criterion_main!(benches);
