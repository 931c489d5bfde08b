//! Benchmarks for cell conversions.

#![allow(missing_docs)]

use braille::{codepoint_to_matrix, matrix_to_codepoint, parse_cells, BrailleCell};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    group.throughput(Throughput::Elements(1));

    let four = [[1u8, 0], [0, 1], [1, 1], [0, 1]];
    let three = [[1u8, 0], [0, 1], [1, 1]];

    group.bench_function("matrix_to_codepoint", |b| {
        b.iter(|| black_box(matrix_to_codepoint(black_box(&four))));
    });

    group.bench_function("matrix_to_codepoint_shorthand", |b| {
        b.iter(|| black_box(matrix_to_codepoint(black_box(&three))));
    });

    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    group.throughput(Throughput::Elements(256));

    group.bench_function("codepoint_to_matrix_all", |b| {
        b.iter(|| {
            for cp in 0x2800u32..=0x28FF {
                black_box(codepoint_to_matrix(black_box(cp)).ok());
            }
        });
    });

    group.finish();
}

fn bench_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell");

    group.throughput(Throughput::Elements(1));
    group.bench_function("from_char", |b| {
        b.iter(|| black_box(BrailleCell::from_char(black_box('⠑'))));
    });

    let text: String = BrailleCell::all().map(|cell| cell.character()).collect();
    group.throughput(Throughput::Elements(256));
    group.bench_function("parse_cells_256", |b| {
        b.iter(|| black_box(parse_cells(black_box(&text))));
    });

    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack, bench_cell);
criterion_main!(benches);
