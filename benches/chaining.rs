//! Benchmarks for the chaining engines.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use syllog::expr::{to_postfix, tokenize};
use syllog::infer;
use syllog::kb::KnowledgeBase;

/// A linear chain s0 -> s1 -> ... -> s{depth}.
fn chain_kb(depth: usize) -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.assign("s0", true);
    for i in 0..depth {
        kb.add_rule(&format!("s{i}"), &format!("s{}", i + 1)).unwrap();
    }
    kb
}

fn bench_learn(c: &mut Criterion) {
    c.bench_function("learn_chain_100", |bench| {
        bench.iter_batched(
            || chain_kb(100),
            |mut kb| infer::learn(black_box(&mut kb)).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_query(c: &mut Criterion) {
    let kb = chain_kb(100);
    let goal = to_postfix(&tokenize("s100").unwrap()).unwrap();

    c.bench_function("query_chain_100", |bench| {
        bench.iter(|| infer::query(black_box(&kb), black_box(&goal)).unwrap())
    });
}

fn bench_explain(c: &mut Criterion) {
    let kb = chain_kb(50);
    let goal = to_postfix(&tokenize("s50").unwrap()).unwrap();

    c.bench_function("explain_chain_50", |bench| {
        bench.iter(|| infer::explain(black_box(&kb), black_box(&goal)).unwrap())
    });
}

criterion_group!(benches, bench_learn, bench_query, bench_explain);
criterion_main!(benches);
