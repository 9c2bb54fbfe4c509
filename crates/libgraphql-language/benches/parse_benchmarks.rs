mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_language::GraphQLParser;
use libgraphql_language::token_source::StrGraphQLTokenSource;

// ─── Group 1: Parsing ────────────────────────────────────

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.throughput(Throughput::Bytes(fixtures::SCHEMA.len() as u64));
    group.bench_function("schema", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::SCHEMA);
            black_box(parser.parse_document())
        })
    });

    group.throughput(Throughput::Bytes(fixtures::QUERY.len() as u64));
    group.bench_function("query", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(fixtures::QUERY);
            black_box(parser.parse_document())
        })
    });

    let nested_30 = fixtures::deeply_nested_query(30);
    group.throughput(Throughput::Bytes(nested_30.len() as u64));
    group.bench_function("nested_depth_30", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&nested_30);
            black_box(parser.parse_document())
        })
    });

    let many_ops = fixtures::many_operations(50);
    group.throughput(Throughput::Bytes(many_ops.len() as u64));
    group.bench_function("many_operations_50", |b| {
        b.iter(|| {
            let parser = GraphQLParser::new(&many_ops);
            black_box(parser.parse_document())
        })
    });

    group.finish();
}

// ─── Group 2: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    for (name, source) in [("schema", fixtures::SCHEMA), ("query", fixtures::QUERY)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let count = StrGraphQLTokenSource::new(source)
                    .filter_map(Result::ok)
                    .count();
                black_box(count)
            })
        });
    }

    group.finish();
}

// ─── Group 3: Printing ───────────────────────────────────

fn print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");

    for (name, source) in [("schema", fixtures::SCHEMA), ("query", fixtures::QUERY)] {
        let Ok(doc) = libgraphql_language::parse(source) else {
            panic!("{name} fixture failed to parse");
        };
        group.bench_function(name, |b| b.iter(|| black_box(libgraphql_language::print(&doc))));
    }

    group.finish();
}

criterion_group!(benches, parse, lexer, print);
criterion_main!(benches);
