use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use orban::regex::{compile, matches};

/// `a?^n a^n` matched against `a^n`. A backtracking matcher takes time
/// exponential in `n` on this, the NFA simulation should scale with `n`.
fn pathological_regex(n: usize) -> String {
    format!("{}{}", "a?".repeat(n), "a".repeat(n))
}

pub fn pathological_input_size_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological regex size comparison");

    (1..6)
        .map(|exponent| 2usize.pow(exponent))
        .for_each(|n| {
            let nfa = compile(&pathological_regex(n)).expect("Failed to compile regex");
            let input = "a".repeat(n);

            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new("regex of size", n), &input, |b, input| {
                b.iter(|| assert!(matches(&nfa, input)))
            });
        });

    group.finish();
}

pub fn compile_benchmark(c: &mut Criterion) {
    c.bench_function("compile nested alternation", |b| {
        b.iter(|| compile("((a|b)*c|(d|e)+f?)*(g|h)").expect("Failed to compile regex"))
    });
}

criterion_group!(benches, pathological_input_size_comparison, compile_benchmark);
criterion_main!(benches);
