//! Criterion benchmarks for artissist_logger

use artissist_logger::prelude::*;
use artissist_logger::format_message;
use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

/// Adapter that accepts everything and keeps nothing
struct NullAdapter;

#[async_trait]
impl LogAdapter for NullAdapter {
    fn name(&self) -> &str {
        "null"
    }

    async fn write(&self, record: &LogRecord, formatted: &str) -> Result<()> {
        black_box((record, formatted));
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_format_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_message");
    group.throughput(Throughput::Elements(1));

    let bare = LogRecord::new(LogLevel::Info, "Projects listed", "backend-api");
    let with_context = bare.clone().with_context(
        LoggingContext::new()
            .with_correlation_id("c-123")
            .with_user_id("u-42")
            .with_request_id("req-9"),
    );

    group.bench_function("bare", |b| {
        b.iter(|| format_message(black_box(&bare), false, None));
    });

    group.bench_function("context_and_symbol", |b| {
        b.iter(|| format_message(black_box(&with_context), true, Some("🔄")));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(&with_context).to_json());
    });

    group.finish();
}

// ============================================================================
// Symbol Lookup Benchmarks
// ============================================================================

fn bench_symbol_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_lookup");
    let resolver = SymbolResolver::new();
    resolver.add_custom_mapping("cache_warm", SymbolMapping::new("🔥", "Cache warm-up"));

    group.bench_function("enumerated", |b| {
        b.iter(|| resolver.get_symbol(black_box(Some(LogEvent::ApiRequest)), None));
    });

    group.bench_function("custom", |b| {
        b.iter(|| resolver.get_symbol(None, black_box(Some("cache_warm"))));
    });

    group.bench_function("miss", |b| {
        b.iter(|| resolver.get_symbol(None, black_box(Some("unknown"))));
    });

    group.finish();
}

// ============================================================================
// Context Merge Benchmarks
// ============================================================================

fn bench_context_merge(c: &mut Criterion) {
    let ambient = LoggingContext::new()
        .with_correlation_id("c-1")
        .with_field("deployment_id", "blue");
    let base = LoggingContext::new().with_user_id("u-1").with_field("service_version", "1.0.0");
    let call = LoggingContext::new().with_request_id("req-1");

    c.bench_function("context_merge_chain", |b| {
        b.iter(|| black_box(&ambient).merge(&base).merge(&call));
    });
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime");

    for adapter_count in [1usize, 4, 16] {
        let logger = (0..adapter_count)
            .fold(Logger::builder().service("bench").emojis(true), |builder, _| {
                builder.shared_adapter(Arc::new(NullAdapter))
            })
            .runtime(runtime.handle().clone())
            .build();

        group.bench_function(format!("{}_adapters", adapter_count), |b| {
            b.to_async(&runtime).iter(|| {
                logger.info_with(
                    black_box("benchmark message"),
                    LogOptions::new().event(LogEvent::PerformanceMetric),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_message,
    bench_symbol_lookup,
    bench_context_merge,
    bench_fan_out,
);
criterion_main!(benches);
