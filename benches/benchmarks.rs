//! Performance benchmarks for argsof

use argsof::file_utils::read_source_file;
use argsof::{ARGUMENTS_OF, Parameter, Shape, ShapeConfig, create};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use tempfile::TempDir;

const REGULAR_SOURCE: &str = r#"function request(url, method = "GET", ...handlers) {
    return fetch(url, { method }).then((res) => handlers.reduce((acc, h) => h(acc), res));
}
"#;

const ARROW_SOURCE: &str = r#"(state, action /* redux action */, extra = {}) => {
    switch (action.type) {
        default:
            return state;
    }
}
"#;

const CLASS_SOURCE: &str = r#"class Connection extends EventEmitter {
    static create(options) {
        return new Connection(options.host, options.port);
    }

    constructor(host, port = 5432, ...plugins) {
        super();
        this.host = host;
        this.port = port;
        this.plugins = plugins;
    }
}
"#;

fn bench_extraction_by_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_by_shape");

    for (shape, source) in [
        (Shape::Regular, REGULAR_SOURCE),
        (Shape::Arrow, ARROW_SOURCE),
        (Shape::Class, CLASS_SOURCE),
    ] {
        group.bench_with_input(BenchmarkId::new("all_shapes", shape), source, |b, src| {
            b.iter(|| ARGUMENTS_OF.extract(black_box(src)))
        });

        let only = create(Some(ShapeConfig::only(shape)));
        group.bench_with_input(BenchmarkId::new("single_shape", shape), source, |b, src| {
            b.iter(|| only.extract(black_box(src)))
        });
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for token in ["value", "port = 5432", "...plugins"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, t| {
            b.iter(|| Parameter::classify(black_box(t)))
        });
    }

    group.finish();
}

fn bench_long_parameter_list(c: &mut Criterion) {
    let params: Vec<String> = (0..200).map(|i| format!("p{} = {}", i, i)).collect();
    let source = format!("function wide({}) {{}}", params.join(",\n    "));

    c.bench_function("long_parameter_list_200", |b| {
        b.iter(|| ARGUMENTS_OF.extract(black_box(source.as_str())))
    });
}

fn bench_read_and_extract(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.js");
    fs::write(&path, CLASS_SOURCE).unwrap();

    c.bench_function("read_and_extract_file", |b| {
        b.iter(|| {
            let source = read_source_file(black_box(&path)).unwrap();
            ARGUMENTS_OF.extract(source.as_str())
        })
    });
}

criterion_group!(
    benches,
    bench_extraction_by_shape,
    bench_classification,
    bench_long_parameter_list,
    bench_read_and_extract
);
criterion_main!(benches);
