// benches/error_performance.rs
//! Benchmarks for error construction, message rendering and errno lookup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use node_compat_errors::{
    definitions, format_template, node_error, uv_exception, ErrnoTable, NodeError, Platform,
    SystemContext, Value,
};
use std::time::Duration;

// ============================================================================
// Construction
// ============================================================================

fn bench_static_template(c: &mut Criterion) {
    c.bench_function("create_static_template", |b| {
        b.iter(|| black_box(node_error!(definitions::ERR_STREAM_PREMATURE_CLOSE)))
    });
}

fn bench_format_template(c: &mut Criterion) {
    c.bench_function("create_format_template", |b| {
        b.iter(|| black_box(node_error!(definitions::ERR_UNKNOWN_ENCODING, "latin9")))
    });
}

fn bench_typed_constructors(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_constructors");

    group.bench_function("invalid_arg_type", |b| {
        b.iter(|| {
            black_box(NodeError::invalid_arg_type(
                "chunk",
                &["string", "Buffer", "TypedArray", "DataView"],
                Value::from(42),
            ))
        })
    });

    group.bench_function("out_of_range_separator", |b| {
        b.iter(|| {
            black_box(NodeError::out_of_range(
                "offset",
                ">= 0 && <= 4294967295",
                Value::from(9_007_199_254_740_991i64),
            ))
        })
    });

    group.bench_function("socket_bad_port", |b| {
        b.iter(|| black_box(NodeError::socket_bad_port("Port", Value::from(-1), true)))
    });

    group.finish();
}

// ============================================================================
// Rendering
// ============================================================================

fn bench_template_placeholders(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_template");
    for count in [1usize, 4, 16] {
        let template = "%s ".repeat(count);
        let args: Vec<Value> = (0..count).map(|i| Value::from(i as f64)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(format_template(&template, &args)))
        });
    }
    group.finish();
}

fn bench_log_entry(c: &mut Criterion) {
    let err = NodeError::invalid_url("https://exa mple.com/")
        .with_field("attempt", 3)
        .with_cause(node_error!(definitions::ERR_INVALID_URL_SCHEME, "file"));

    c.bench_function("log_entry_write_to", |b| {
        let mut buffer = String::with_capacity(256);
        b.iter(|| {
            buffer.clear();
            err.log_entry().write_to(&mut buffer).unwrap();
            black_box(buffer.len())
        })
    });
}

// ============================================================================
// Errno Tables
// ============================================================================

fn bench_errno_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("errno_lookup");
    for platform in Platform::ALL {
        let table = ErrnoTable::for_platform(platform);
        let code = table.code_of("ECONNRESET").unwrap_or(-1);
        group.bench_with_input(BenchmarkId::new("get", platform), &code, |b, &code| {
            b.iter(|| black_box(table.get(black_box(code))))
        });
        group.bench_with_input(BenchmarkId::new("code_of", platform), &(), |b, _| {
            b.iter(|| black_box(table.code_of(black_box("ECONNRESET"))))
        });
    }
    group.finish();
}

fn bench_uv_exception(c: &mut Criterion) {
    let table = ErrnoTable::for_platform(Platform::Linux);
    let ctx = SystemContext::builder()
        .errno(-2)
        .syscall("open")
        .path("/var/lib/app/state.json")
        .try_build()
        .unwrap();

    c.bench_function("uv_exception", |b| {
        b.iter(|| black_box(uv_exception(table, &ctx).unwrap()))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets =
        bench_static_template,
        bench_format_template,
        bench_typed_constructors,
        bench_template_placeholders,
        bench_log_entry,
        bench_errno_lookup,
        bench_uv_exception
}
criterion_main!(benches);
