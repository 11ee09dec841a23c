//! Benchmarks for the hex grid engine
//!
//! Measures performance of:
//! - Coordinate conversions
//! - Range enumeration
//! - Lines and field of view
//! - Pathfinding on open and walled boards

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use critfumble_hexgrid::{
    axial_to_offset, cells_in_range, hex_field_of_view, hex_line, hex_pathfind, hex_range,
    hex_to_pixel, offset_to_axial, pixel_to_hex, BlockedSet, HexLayout, OffsetCoord,
};

/// Offset -> axial -> offset
fn bench_roundtrip(c: &mut Criterion) {
    let coords: Vec<OffsetCoord> = (-50..50).map(|i| OffsetCoord::new(i * 7, i * -3)).collect();

    c.bench_function("offset_axial_roundtrip_100", |b| {
        b.iter(|| {
            for &coord in &coords {
                black_box(axial_to_offset(offset_to_axial(black_box(coord))));
            }
        })
    });
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_range");

    for &range in &[1u32, 5, 10, 25, 50] {
        group.throughput(Throughput::Elements(cells_in_range(range) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |b, &r| {
            b.iter(|| hex_range(black_box(OffsetCoord::ORIGIN), r))
        });
    }
    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_line");

    for &len in &[4i32, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &l| {
            b.iter(|| hex_line(OffsetCoord::ORIGIN, black_box(OffsetCoord::new(l, l / 2))))
        });
    }
    group.finish();
}

/// A scatter of pillars every few cells
fn pillars(extent: i32, spacing: usize) -> BlockedSet {
    (-extent..=extent)
        .step_by(spacing)
        .flat_map(|col| {
            (-extent..=extent)
                .step_by(spacing)
                .map(move |row| OffsetCoord::new(col + (row & 1), row))
        })
        .filter(|&c| c != OffsetCoord::ORIGIN)
        .collect()
}

fn bench_field_of_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_field_of_view");
    let blocked = pillars(20, 3);

    for &range in &[3u32, 6, 12] {
        group.throughput(Throughput::Elements(cells_in_range(range) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |b, &r| {
            b.iter(|| hex_field_of_view(OffsetCoord::ORIGIN, r, black_box(&blocked)))
        });
    }
    group.finish();
}

fn bench_pathfind(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_pathfind");
    let open = BlockedSet::new();
    let walled: BlockedSet = (-30..=30).map(|row| OffsetCoord::new(10, row)).collect();
    let scattered = pillars(40, 3);

    for &dist in &[10i32, 25, 50] {
        let goal = OffsetCoord::new(dist, 0);
        group.bench_with_input(BenchmarkId::new("open", dist), &goal, |b, &g| {
            b.iter(|| hex_pathfind(OffsetCoord::ORIGIN, black_box(g), &open))
        });
        group.bench_with_input(BenchmarkId::new("wall", dist), &goal, |b, &g| {
            b.iter(|| hex_pathfind(OffsetCoord::ORIGIN, black_box(g), &walled))
        });
        group.bench_with_input(BenchmarkId::new("pillars", dist), &goal, |b, &g| {
            b.iter(|| hex_pathfind(OffsetCoord::ORIGIN, black_box(g), &scattered))
        });
    }
    group.finish();
}

fn bench_pixel(c: &mut Criterion) {
    let layout = HexLayout::default();

    c.bench_function("pixel_roundtrip", |b| {
        b.iter(|| {
            let p = hex_to_pixel(black_box(OffsetCoord::new(17, -23)), &layout);
            pixel_to_hex(p.x, p.y, &layout)
        })
    });
}

criterion_group!(
    benches,
    bench_roundtrip,
    bench_range,
    bench_line,
    bench_field_of_view,
    bench_pathfind,
    bench_pixel,
);

criterion_main!(benches);
