use clue::{Builder, Flags, Parser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const FLAGS: Flags = Flags::NO_EXIT_ON_ERROR;

#[derive(Default)]
struct Arguments {
    message: String,
    count: i32,
    verbose: bool,
    values: Vec<f64>,
    position: [f32; 3],
}

fn parser() -> Parser<'static, Arguments> {
    Builder::<Arguments>::new()
        .name("bench")
        .description("Measures parsing and usage rendering.")
        .positional(|argument| argument.name("message").field(|arguments| &mut arguments.message).help("A message to print."))
        .optional(|argument| argument.name("count").field(|arguments| &mut arguments.count).help("Number of times to print the message."))
        .optional(|argument| argument.name("verbose").field(|arguments| &mut arguments.verbose).help("Print more details."))
        .optional(|argument| argument.name("values").field(|arguments| &mut arguments.values).count(1..=16).help("Values to sum."))
        .optional(|argument| argument.name("position").field(|arguments| &mut arguments.position).help("A 3 float point."))
        .build()
        .unwrap()
}

fn parse(criterion: &mut Criterion) {
    let mut parser = parser();
    let tokens = [
        "hello", "-count", "3", "-verbose", "-values", "1", "2.5", "-3", "4e2", "-position", "1",
        "2", "3",
    ];
    criterion.bench_function("parse", |bencher| {
        bencher.iter(|| parser.parse_with(black_box(tokens), FLAGS).is_ok())
    });
    criterion.bench_function("unrecognized", |bencher| {
        bencher.iter(|| parser.parse_with(black_box(["hello", "-cont", "3"]), FLAGS).is_err())
    });
}

fn usage(criterion: &mut Criterion) {
    let parser = parser();
    criterion.bench_function("usage", |bencher| {
        bencher.iter(|| parser.usage(black_box(Flags::NONE)).map(|usage| usage.len()))
    });
}

criterion_group!(benches, parse, usage);
criterion_main!(benches);
