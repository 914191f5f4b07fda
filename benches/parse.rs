//! Benchmarks for the decimal/hex parse paths.
//!
//! Grouped by which internal strategy is expected to resolve each input
//! (fast / mid / big-number), so a regression in one path doesn't hide in
//! an aggregate number. Mirrors the shape of `lexical-benchmark`'s
//! `parse-float` crate: one group per representative input class, `[ns]`
//! scaling on by criterion's default.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const FAST_PATH_INPUTS: &[&str] = &["1", "3.14159", "625e-3", "100.0", "-42.5"];
const MID_PATH_INPUTS: &[&str] = &["2.2250738585072014e-308", "1.5e100", "6.02214076e23", "1e-250"];
const BIG_NUMBER_INPUTS: &[&str] = &[
    "2.2250738585072011e-308",
    "9007199254740993.0",
    "1.7976931348623157e308",
    "5e-324",
];
const HEX_INPUTS: &[&str] = &["0x1.8p1", "0x1.fffffffffffffp1023", "0x1p-1074"];

fn bench_group(c: &mut Criterion, name: &str, inputs: &[&str]) {
    let mut group = c.benchmark_group(name);
    for input in inputs {
        group.bench_with_input(*input, input, |b, input| {
            b.iter(|| black_box(floatconv::parse::<f64>(black_box(input.as_bytes()))));
        });
    }
    group.finish();
}

fn fast_path(c: &mut Criterion) {
    bench_group(c, "parse/fast_path", FAST_PATH_INPUTS);
}

fn mid_path(c: &mut Criterion) {
    bench_group(c, "parse/mid_path", MID_PATH_INPUTS);
}

fn big_number_path(c: &mut Criterion) {
    bench_group(c, "parse/big_number_path", BIG_NUMBER_INPUTS);
}

fn hex(c: &mut Criterion) {
    bench_group(c, "parse/hex", HEX_INPUTS);
}

criterion_group!(benches, fast_path, mid_path, big_number_path, hex);
criterion_main!(benches);
