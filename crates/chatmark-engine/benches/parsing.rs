use chatmark_engine::{parse_document, parse_inline_for_block, resolve};
use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::{Options, Parser};
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_chat_message(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new_ext(
                std::hint::black_box(&content),
                Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
            );
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.bench_function("blocks", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&content))));
    });

    group.bench_function("blocks_and_inline", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content));
            let inline: Vec<_> = doc.iter().map(parse_inline_for_block).collect();
            std::hint::black_box(inline);
        });
    });

    group.finish();
}

fn bench_inline_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    for runs in [10, 100, 1000] {
        let text = common::generate_inline_heavy(runs);
        group.bench_function(format!("resolve_{runs}"), |b| {
            b.iter(|| std::hint::black_box(resolve(std::hint::black_box(&text))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_inline_resolver);
criterion_main!(benches);
