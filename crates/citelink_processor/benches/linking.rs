use citelink_core::Source;
use citelink_processor::{linkify, process_web_citations};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_linking(c: &mut Criterion) {
    let sources: Vec<Source> = (1..=10)
        .map(|i| Source::from_url(format!("https://example.com/source/{}", i)))
        .collect();

    // A long answer with a marker every sentence, some out of range
    let content: String = (1..=200)
        .map(|i| format!("Sentence {} makes a claim [{}]. ", i, i % 14))
        .collect();

    c.bench_function("Linkify (200 markers, 10 sources)", |b| {
        b.iter(|| linkify(black_box(&content), black_box(&sources)))
    });

    c.bench_function("Web citations (200 markers, 10 sources)", |b| {
        b.iter(|| process_web_citations(black_box(&content), black_box(&sources)))
    });
}

criterion_group!(benches, bench_linking);
criterion_main!(benches);
