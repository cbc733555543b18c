use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::split_into_words;
use search_core::{DocumentStatus, SearchServer};
use tracing_subscriber::{fmt, EnvFilter};

const WORDS: &[&str] = &[
    "cat", "dog", "city", "river", "bridge", "tower", "garden", "market", "harbor", "forest",
    "mountain", "valley", "station", "library", "museum", "theatre",
];

fn synthetic_text(seed: usize, len: usize) -> String {
    (0..len)
        .map(|i| WORDS[(seed * 7 + i * 13) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_server(num_docs: usize) -> SearchServer {
    let _ = fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
    let mut server = SearchServer::with_stop_words("in the and").unwrap();
    for id in 0..num_docs {
        let text = synthetic_text(id, 40);
        server
            .add_document(id as i32, &text, DocumentStatus::Actual, &[id as i32 % 10])
            .unwrap();
    }
    server
}

fn bench_tokenize(c: &mut Criterion) {
    let text = synthetic_text(3, 2_000);
    c.bench_function("split_into_words_2k", |b| b.iter(|| split_into_words(&text)));
}

fn bench_find_top(c: &mut Criterion) {
    let server = build_server(5_000);
    c.bench_function("find_top_documents_5k", |b| {
        b.iter(|| server.find_top_documents("cat river -museum tower"))
    });
}

criterion_group!(benches, bench_tokenize, bench_find_top);
criterion_main!(benches);
