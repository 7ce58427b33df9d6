//! Criterion benchmarks for rust_logger_shim

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_logger_shim::prelude::*;

fn discard_logger() -> ConsoleLogger {
    ConsoleLogger::new(LogSink::new(std::io::sink()))
}

// ============================================================================
// Emitter Benchmarks
// ============================================================================

fn bench_console_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("console_logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger();

    group.bench_function("info_concat", |b| {
        b.iter(|| {
            logger.info(&[&black_box("Request "), &black_box(42), &" processed"]);
        });
    });

    group.bench_function("infof", |b| {
        b.iter(|| {
            logger.infof(format_args!("Request {} processed", black_box(42)));
        });
    });

    group.finish();
}

fn bench_null_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("null_logging");
    group.throughput(Throughput::Elements(1));

    let logger: Box<dyn Logger> = Box::new(NullLogger::new());

    group.bench_function("info_concat", |b| {
        b.iter(|| {
            logger.info(&[&black_box("Request "), &black_box(42)]);
        });
    });

    group.bench_function("infof", |b| {
        b.iter(|| {
            logger.infof(format_args!("Request {} processed", black_box(42)));
        });
    });

    group.finish();
}

// ============================================================================
// Field Context Benchmarks
// ============================================================================

fn bench_with_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_fields");

    for field_count in [0usize, 4, 16] {
        let base: Fields = (0..field_count)
            .map(|i| (format!("key{}", i), i))
            .collect();
        let logger = discard_logger().derive(&base);

        group.bench_with_input(
            BenchmarkId::new("derive", field_count),
            &field_count,
            |b, _| {
                b.iter(|| black_box(logger.with_fields(Fields::new().with_field("request_id", "abc"))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("log_with_fields", field_count),
            &field_count,
            |b, _| {
                b.iter(|| logger.warn(&[&black_box("slow request")]));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_console_logging,
    bench_null_logging,
    bench_with_fields
);
criterion_main!(benches);
