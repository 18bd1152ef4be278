use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simacogo_ai::node::GameNode;
use simacogo_ai::search::{SearchOptions, Searcher};

fn decide(node: &GameNode, depth: usize, use_alpha_beta: bool) -> usize {
    let mut searcher = Searcher::new(SearchOptions {
        depth,
        use_alpha_beta,
        avoid_winning: false,
    });
    searcher.decide(node).unwrap_or(0)
}

fn criterion_benchmark(c: &mut Criterion) {
    let opening = GameNode::from_moves("5546").expect("valid opening");

    c.bench_function("minimax 4", |b| {
        b.iter(|| decide(black_box(&opening), black_box(4), false))
    });
    c.bench_function("alpha-beta 4", |b| {
        b.iter(|| decide(black_box(&opening), black_box(4), true))
    });
    c.bench_function("alpha-beta 6", |b| {
        b.iter(|| decide(black_box(&opening), black_box(6), true))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
