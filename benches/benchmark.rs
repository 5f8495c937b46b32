use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unidetect::{detect_scripts, Detector, DetectorConfig, ScriptOrder};

const INPUTS: [(&str, &str); 5] = [
    ("ascii", "The quick brown fox jumps over the lazy dog 0123456789"),
    ("cyrillic", "Съешь же ещё этих мягких французских булок, да выпей чаю"),
    ("cjk", "日本語のテキストと北京の漢字、カタカナも混ざっています"),
    ("mixed", "北京beijing москва 123 ابوظبي कॉम 닷넷 გე ⠋⠗"),
    ("unassigned", "\u{0378}\u{0379}\u{0380}\u{0381}\u{0382}\u{0383}"),
];

fn inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_scripts");
    for (name, text) in INPUTS {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| detect_scripts(text))
        });
    }
    group.finish();
}

fn table_order(c: &mut Criterion) {
    let detector = Detector::new(
        unidetect::unicode_scripts(),
        DetectorConfig {
            order: ScriptOrder::Table,
        },
    );
    let (_, text) = INPUTS[3];
    c.bench_with_input(BenchmarkId::new("table order", "mixed"), text, |b, text| {
        b.iter(|| detector.detect(text))
    });
}

criterion_group!(benches, inputs, table_order);

criterion_main!(benches);
