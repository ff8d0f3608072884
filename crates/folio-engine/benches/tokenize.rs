use criterion::{Criterion, criterion_group, criterion_main};
use folio_engine::{citations_in, split_paragraphs_and_lists, tokenize};
mod common;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let short = common::generate_paragraph(1);
    let long = common::generate_paragraph(200);

    group.bench_function("tokenize_short", |b| {
        b.iter(|| tokenize(std::hint::black_box(&short)))
    });

    group.bench_function("tokenize_long", |b| {
        b.iter(|| tokenize(std::hint::black_box(&long)))
    });

    group.bench_function("citations_in_long", |b| {
        b.iter(|| citations_in(std::hint::black_box(&long)))
    });

    let body = "Intro line\n- one\n- two\n\nOutro\n".repeat(100);
    group.bench_function("split_body", |b| {
        b.iter(|| split_paragraphs_and_lists(std::hint::black_box(&body), Default::default()))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
