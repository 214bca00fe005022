use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use petiole_parser::parse;

fn bench_small_programs(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_programs");

    let programs = vec![
        ("empty_function", "func Noop()\n    return\n"),
        (
            "function_with_statement",
            "func Answer() int\n    x := 42\n    return x\n",
        ),
        (
            "function_with_params",
            "func Add(a int, b int) int\n    return a + b\n",
        ),
        (
            "function_with_expression",
            "func Calc() int\n    return (1 + 2) * 3\n",
        ),
    ];

    for (name, source) in &programs {
        group.bench_with_input(BenchmarkId::new("program", name), source, |b, source| {
            b.iter(|| black_box(parse(source)))
        });
    }

    group.finish();
}

fn bench_pipe_and_onerr(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipe_and_onerr");

    let source = concat!(
        "func Run(xs list of int) list of int\n",
        "    xs |> Filter(_, isEven) |> Map(_, double)\n",
        "    data := Load(\"x\") onerr err\n",
        "        return xs\n",
        "    return xs\n",
    );

    group.bench_function("pipe_and_onerr", |b| b.iter(|| black_box(parse(source))));
    group.finish();
}

fn bench_large_program(c: &mut Criterion) {
    let mut body = String::new();
    for i in 0..200 {
        body.push_str(&format!("    x{i} := {i}\n"));
    }
    let source = format!("func Many() int\n{body}    return 0\n");

    c.bench_function("large_program_200_statements", |b| {
        b.iter(|| black_box(parse(&source)))
    });
}

fn bench_error_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_recovery");

    let scenarios = vec![
        ("missing_close_paren", "func Bad(a int\n    return a\n"),
        (
            "variadic_not_last",
            "func Bad(many rest int, x int)\n    return\n",
        ),
    ];

    for (name, source) in &scenarios {
        group.bench_with_input(BenchmarkId::new("scenario", name), source, |b, source| {
            b.iter(|| black_box(parse(source)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_small_programs,
    bench_pipe_and_onerr,
    bench_large_program,
    bench_error_recovery
);
criterion_main!(benches);
