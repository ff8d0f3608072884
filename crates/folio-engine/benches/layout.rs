use criterion::{Criterion, criterion_group, criterion_main};
use folio_engine::{Article, LayoutStrategy, RenderOptions};
mod common;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.sample_size(20);

    let json = common::generate_article_json(500);
    let article = Article::from_json(&json).unwrap();

    for strategy in LayoutStrategy::ALL {
        group.bench_function(format!("compose_{strategy}"), |b| {
            b.iter(|| {
                let composition = article.compose(std::hint::black_box(strategy));
                std::hint::black_box(composition.layout.len());
            });
        });
    }

    group.bench_function("render_html", |b| {
        let options = RenderOptions::default();
        b.iter(|| article.render_html(LayoutStrategy::StrictGrid, std::hint::black_box(&options)))
    });

    group.bench_function("parse_article", |b| {
        b.iter(|| Article::from_json(std::hint::black_box(&json)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
