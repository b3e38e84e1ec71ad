use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use highxbot::{FixedSelector, KnowledgeBase, Matcher, Responder, normalize, parse_knowledge};

const TOPICS: [&str; 8] = [
    "weather", "music", "rust", "coffee", "football", "travel", "books", "cooking",
];

/// `count` distinct questions spread over a handful of shared words.
fn sample_knowledge(count: usize) -> KnowledgeBase {
    let mut text = String::new();
    for i in 0..count {
        let topic = TOPICS[i % TOPICS.len()];
        text.push_str(&format!(
            "what do you know about {topic} number {i}|Answer {i} about {topic}.\n"
        ));
    }
    parse_knowledge(&text)
}

fn bench_normalize(c: &mut Criterion) {
    let input = "  Hello there, what's the WEATHER like in Zürich today?!  ";
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("mixed_sentence", |b| b.iter(|| normalize(black_box(input))));
    group.finish();
}

/// One query per lookup stage, at increasing knowledge sizes.
fn bench_match_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_stages");

    for size in [100usize, 1_000, 5_000] {
        let matcher = Matcher::new(sample_knowledge(size));
        let queries = [
            ("exact", "what do you know about rust number 2"),
            ("overlap", "tell me about coffee"),
            ("fuzzy", "whatdoyouknowaboutrustnumber2"),
            ("miss", "zzzz qqqq"),
        ];

        group.throughput(Throughput::Elements(size as u64));
        for (stage, query) in queries {
            group.bench_with_input(BenchmarkId::new(stage, size), &query, |b, query| {
                b.iter(|| matcher.best_match(black_box(query)))
            });
        }
    }

    group.finish();
}

fn bench_respond(c: &mut Criterion) {
    let responder =
        Responder::with_selector(Matcher::new(sample_knowledge(1_000)), FixedSelector(0));
    let mut group = c.benchmark_group("respond");

    for (name, input) in [
        ("greeting", "Hello!"),
        ("knowledge", "What do you know about music number 1?"),
        ("number", "123456"),
        ("fallback", "zzzz qqqq"),
    ] {
        group.bench_function(name, |b| b.iter(|| responder.respond(black_box(input))));
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_match_stages, bench_respond);
criterion_main!(benches);
