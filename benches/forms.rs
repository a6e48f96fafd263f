//! Criterion benchmarks for the three wire forms and the long parser.

use std::net::{IpAddr, Ipv4Addr};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vbus_uri::{Authority, Entity, Resource, Uri, long_form, micro_form, short_form};

fn sample_uri() -> Uri {
    Uri::new(
        Authority::remote_with_address("vcu", "vin", IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
        Entity::new("body.access", Some("1")).with_id(7),
        Resource::new("door", Some("front_left"), Some("Door")).with_id(3),
    )
}

/// Benchmark: long_form::parse with varying address shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("minimal", "/hartley"),
        ("local_full", "/body.access/1/door.front_left#Door"),
        ("remote_full", "//vcu.vin.veh.example/body.access/1/door.front_left#Door"),
        ("method", "//vcu.vin/hartley/1/rpc.Raise"),
        ("with_scheme", "up://vcu.vin/hartley/1/rpc.Raise"),
    ];

    for (name, text) in test_cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("long", name), &text, |b, text| {
            b.iter(|| long_form::parse(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark: the three builders over the same fully populated URI
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let uri = sample_uri();

    group.bench_function("long", |b| b.iter(|| long_form::build(black_box(&uri))));
    group.bench_function("short", |b| b.iter(|| short_form::build(black_box(&uri))));
    group.bench_function("micro", |b| b.iter(|| micro_form::build(black_box(&uri))));

    group.finish();
}

criterion_group!(benches, bench_parse, bench_build);
criterion_main!(benches);
