//! Benchmarks for markdown parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inkmark::markdown;

fn bench_parse_simple(c: &mut Criterion) {
    let md = "# Hello\n\nplain *italic* and **bold** text";
    c.bench_function("parse_simple", |b| b.iter(|| markdown::parse(black_box(md))));
}

fn bench_parse_article(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/article.md");
    c.bench_function("parse_article", |b| b.iter(|| markdown::parse(black_box(md))));
}

fn bench_clear_article(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/article.md");
    c.bench_function("clear_article", |b| {
        b.iter(|| markdown::clear(black_box(Some(md))))
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_article,
    bench_clear_article
);
criterion_main!(benches);
