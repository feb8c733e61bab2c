use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use remora::{AdjacencyGraph, BinaryHeap, HeapOrder};
use std::hint::black_box;

/// Layered digraph where every vertex points at the whole next layer. The
/// shortest path from the first to the last vertex crosses every layer.
fn build_layered_graph(layers: usize, width: usize) -> AdjacencyGraph<usize> {
    let mut g = AdjacencyGraph::new();
    for v in 0..layers * width {
        g.add_vertex(v);
    }
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            for j in 0..width {
                let _ = g.add_edge(layer * width + i, (layer + 1) * width + j);
            }
        }
    }
    g
}

fn bench_shortest_path(c: &mut Criterion) {
    let g = build_layered_graph(64, 16);
    let last = 64 * 16 - 1;
    c.bench_function("shortest_path_layered_64x16", |b| {
        b.iter(|| black_box(g.shortest_path(black_box(&0), black_box(&last))))
    });
}

fn bench_heapify(c: &mut Criterion) {
    let values: Vec<i64> = (0..10_000)
        .map(|i: i64| (i * 2_654_435_761) % 1_000_003)
        .collect();
    c.bench_function("heapify_10k", |b| {
        b.iter_batched(
            || values.clone(),
            |values| {
                let mut heap = BinaryHeap::new(HeapOrder::Min);
                heap.heapify(values);
                black_box(heap.peek().copied())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_shortest_path, bench_heapify);
criterion_main!(benches);
