use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kata_forge::{stub_from_solution, suite_from_tests};
use std::hint::black_box;

fn create_test_source(assertions: usize) -> String {
    let mut source = String::new();
    for i in 0..assertions {
        source.push_str(&format!(
            "Test.assertEquals(tally([{i}, -{i}, {{a: '{i}', b: [true, null]}}]), {{total: {i}.0}});\n",
            i = i
        ));
        if i % 5 == 0 {
            source.push_str(&format!(
                "Test.assertNotEquals(tally(new Set([{i}])), 'x{i}', \"case {i}\");\n",
                i = i
            ));
        }
    }
    source
}

/// Benchmark converting test files of increasing size.
fn benchmark_test_suite(c: &mut Criterion) {
    let mut group = c.benchmark_group("test_suite_transform");

    for &size in &[10, 50, 250] {
        let source = create_test_source(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| black_box(suite_from_tests(black_box(source)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_stub(c: &mut Criterion) {
    let solution = r#"
function tally(items) {
    let total = 0;
    for (const item of items) {
        if (typeof item === "number") {
            total += item;
        }
    }
    return { total };
}
"#;

    c.bench_function("stub_from_solution", |b| {
        b.iter(|| black_box(stub_from_solution(black_box(solution)).unwrap()));
    });
}

criterion_group!(benches, benchmark_test_suite, benchmark_stub);
criterion_main!(benches);
