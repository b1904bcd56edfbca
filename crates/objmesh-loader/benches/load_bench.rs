// ObjMesh - Wavefront Model Loading
// Copyright (C) 2025 ObjMesh Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.


//! Loading performance benchmarks
//!
//! Benchmarks:
//! - Full in-memory load of generated grids at several sizes
//! - Face unpacking alone, per UV claim policy
//! - Normal computation over a pre-unpacked grid

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use objmesh_loader::record::source_lines;
use objmesh_loader::{
    compute_normals, segment, FaceUnpacker, LoadOptions, ModelLoader, UvClaimPolicy,
};
use objmesh_test_utils::TestFixtures;
use std::hint::black_box;
use std::path::Path;

/// Benchmark a full load for growing grid sizes
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_str");
    let loader = ModelLoader::new(LoadOptions::default());

    for size in [16usize, 64, 256] {
        let doc = TestFixtures::grid_obj(size);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| {
                let model = loader.load_str(black_box(doc), Path::new("grid.obj")).unwrap();
                black_box(model);
            });
        });
    }
    group.finish();
}

/// Benchmark unpacking alone under both claim policies
fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    let doc = TestFixtures::grid_obj(128);
    let groups = segment(source_lines(&doc));
    let path = Path::new("grid.obj");

    for (label, policy) in [
        ("zero_sentinel", UvClaimPolicy::ZeroSentinel),
        ("explicit", UvClaimPolicy::Explicit),
    ] {
        let unpacker = FaceUnpacker::new(path, policy);
        group.bench_function(label, |b| {
            b.iter(|| {
                for g in &groups {
                    black_box(unpacker.unpack(black_box(g)).unwrap());
                }
            });
        });
    }
    group.finish();
}

/// Benchmark normal computation
fn bench_normals(c: &mut Criterion) {
    let doc = TestFixtures::grid_obj(256);
    let groups = segment(source_lines(&doc));
    let unpacker = FaceUnpacker::new(Path::new("grid.obj"), UvClaimPolicy::Explicit);
    let object = unpacker.unpack(&groups[0]).unwrap();

    let mut group = c.benchmark_group("normals");
    group.throughput(Throughput::Elements((object.indices.len() / 3) as u64));
    group.bench_function("grid_256", |b| {
        b.iter(|| black_box(compute_normals(&object.positions, &object.indices)));
    });
    group.finish();
}

criterion_group!(benches, bench_load, bench_unpack, bench_normals);
criterion_main!(benches);
