//! Benchmarks for cleanfile throughput.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipeline and format detection at various
//! document sizes.

use cleanfile::{detect_format, Cleaner, CleaningOptions, LineEnding, StripFormat};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NOISE: &[char] = &[
    '\u{200B}', '\u{FEFF}', '\u{00E9}', '\u{0007}', '\u{00A0}', '\u{202E}', '\t',
];

/// Creates a document of `line_count` lines with scattered noise characters.
fn create_noisy_text(line_count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(line_count as u64);
    let mut text = String::new();

    for i in 0..line_count {
        text.push_str(&format!("Line {} carries some ordinary sentence text", i));
        for _ in 0..rng.gen_range(0..4) {
            text.push(NOISE[rng.gen_range(0..NOISE.len())]);
        }
        text.push_str(if i % 2 == 0 { "\r\n" } else { "\n" });
    }

    text
}

/// Creates a Markdown document with `section_count` sections.
fn create_markdown(section_count: usize) -> String {
    let mut text = String::new();
    for i in 0..section_count {
        text.push_str(&format!(
            "## Section {}\n\n- **bold** item\n- [link](https://example.com/{})\n\n```\ncode\n```\n\n",
            i, i
        ));
    }
    text
}

/// Benchmark the full pipeline, sequential and parallel.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let options = CleaningOptions::default().with_line_ending(LineEnding::Unix);

    for line_count in [100, 1_000, 10_000, 50_000].iter() {
        let text = create_noisy_text(*line_count);
        group.throughput(Throughput::Bytes(text.len() as u64));

        let sequential = Cleaner::new(options.clone()).sequential();
        group.bench_with_input(
            BenchmarkId::new("sequential", line_count),
            &text,
            |b, text| b.iter(|| sequential.clean(black_box(text)).unwrap()),
        );

        let parallel = Cleaner::new(options.clone()).with_parallel_threshold(1);
        group.bench_with_input(
            BenchmarkId::new("parallel", line_count),
            &text,
            |b, text| b.iter(|| parallel.clean(black_box(text)).unwrap()),
        );
    }

    group.finish();
}

/// Benchmark Markdown stripping through the pipeline.
fn bench_markdown_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_strip");
    let options = CleaningOptions::default()
        .with_line_ending(LineEnding::Unix)
        .with_strip_format(StripFormat::Markdown);
    let cleaner = Cleaner::new(options);

    for section_count in [10, 100, 1_000].iter() {
        let text = create_markdown(*section_count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            &text,
            |b, text| b.iter(|| cleaner.clean(black_box(text)).unwrap()),
        );
    }

    group.finish();
}

/// Benchmark format detection.
fn bench_format_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_format");

    for section_count in [10, 100, 1_000].iter() {
        let text = create_markdown(*section_count);
        group.bench_with_input(
            BenchmarkId::new("markdown_sections", section_count),
            &text,
            |b, text| b.iter(|| detect_format(black_box(text))),
        );
    }

    group.finish();

    let prose = create_noisy_text(1_000);
    c.bench_function("detect_prose_1000", |b| {
        b.iter(|| detect_format(black_box(&prose)))
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_pipeline,
    bench_markdown_strip,
);
criterion_main!(benches);
