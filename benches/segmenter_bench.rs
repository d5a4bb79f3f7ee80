use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sentseg::{Segmenter, SentenceDetector, UnicodeSegmenter};

const SIMPLE_TEXT: &str = "Hello world. This is a test. How are you?";
const COMPLEX_TEXT: &str = r#"
    "Mr. & Mrs. Smith," she said, "went to Washington, D.C. last week."
    He replied, 'I saw them there.' It was a surprise! Dr. Watson
    arrived at 5 p.m. and left before the U.S. Marshals came.

    The next chapter begins here. J. R. Hartley wrote it.
"#;

fn bench_engines(c: &mut Criterion) {
    let detector = SentenceDetector::with_default_rules().unwrap();
    let long_text = COMPLEX_TEXT.repeat(500);

    let mut group = c.benchmark_group("segment");
    for (name, text) in [("simple", SIMPLE_TEXT), ("complex", COMPLEX_TEXT), ("long", long_text.as_str())] {
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_function(format!("rule_table/{name}"), |b| {
            b.iter(|| detector.segment(black_box(text)).unwrap())
        });

        group.bench_function(format!("uax29/{name}"), |b| {
            b.iter(|| UnicodeSegmenter.segment(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_detector_instantiation(c: &mut Criterion) {
    c.bench_function("detector_instantiation", |b| {
        b.iter(|| SentenceDetector::with_default_rules().unwrap())
    });
}

criterion_group!(benches, bench_engines, bench_detector_instantiation);
criterion_main!(benches);
