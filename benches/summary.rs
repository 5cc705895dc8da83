use divan::black_box;
use jacoco_rs::{
    parsers::csv::parse_export,
    report::{CoverageReport, JACOCO_EXPORT},
};

fn main() {
    divan::main();
}

#[divan::bench]
fn parse_embedded_export() -> usize {
    parse_export(black_box(JACOCO_EXPORT)).unwrap().len()
}

#[divan::bench]
fn build_report(bencher: divan::Bencher) {
    let records = parse_export(JACOCO_EXPORT).unwrap();

    bencher.bench(|| CoverageReport::from_records(black_box(&records)));
}
