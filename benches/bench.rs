//! Criterion benchmarks for nahuatl-nlp.
//!
//! Covers the three hot paths of the toolkit:
//! - Segmentation of single words
//! - Tokenization of whole texts through the default pipeline
//! - Parallel batch analysis

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nahuatl_nlp::analysis::analyzer::NahuatlAnalyzer;
use nahuatl_nlp::config::AnalyzerConfig;
use nahuatl_nlp::morphology::{Lexicon, Segmenter};
use std::hint::black_box;
use std::sync::Arc;

fn lexicon() -> Arc<Lexicon> {
    Arc::new(
        Lexicon::builder()
            .add_builtin_affixes()
            .unwrap()
            .add_sample_roots()
            .unwrap()
            .build(),
    )
}

/// Generate test texts mixing segmentable words, unknown words and punctuation.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "nikoci",
        "kalLi",
        "nokal",
        "tepezin",
        "amo",
        "ninemi",
        "kinita",
        "siwaL",
        "ininkone",
        "xikoci",
        "nikmati",
        "qqq",
        "kali,",
        "ye",
        "tocmej.",
        "2024",
    ];

    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let text_length = 20 + (i % 60);
        let mut text_words = Vec::with_capacity(text_length);
        for j in 0..text_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            text_words.push(words[word_idx]);
        }
        texts.push(text_words.join(" "));
    }
    texts
}

/// Benchmark segmentation of single words.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");
    let segmenter = Segmenter::new(lexicon());

    for word in ["koci", "nikocizin", "ininkonemej", "nitepanoLi", "qqqqqqqq"] {
        group.bench_with_input(BenchmarkId::new("segment", word), word, |b, word| {
            b.iter(|| black_box(segmenter.segment(black_box(word))))
        });
    }

    group.bench_function("segment_all_limit_10", |b| {
        b.iter(|| black_box(segmenter.segment_all(black_box("tepezinzin"), 10)))
    });

    group.finish();
}

/// Benchmark the tokenization pipeline.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let analyzer = NahuatlAnalyzer::new(lexicon()).unwrap();
    let texts = generate_test_texts(100);

    group.bench_function("tokenize_single_text", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.tokenize(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    let classical = NahuatlAnalyzer::with_config(
        lexicon(),
        AnalyzerConfig::new().with_convert_orthography(true),
    )
    .unwrap();
    group.bench_function("tokenize_with_orthography", |b| {
        b.iter(|| {
            let tokens: Vec<_> = classical
                .tokenize(black_box(&texts[1]))
                .unwrap()
                .collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("tokenize_sequential_100", |b| {
        b.iter(|| {
            for text in &texts {
                let tokens: Vec<_> = analyzer.tokenize(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

/// Benchmark parallel batch analysis against the sequential loop above.
fn bench_batch_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_analysis");
    group.sample_size(20);

    let analyzer = NahuatlAnalyzer::new(lexicon()).unwrap();

    for count in [100, 1000] {
        let texts = generate_test_texts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_batch", count),
            &texts,
            |b, texts| b.iter(|| black_box(analyzer.analyze_batch(black_box(texts)))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_tokenization,
    bench_batch_analysis
);

criterion_main!(benches);
