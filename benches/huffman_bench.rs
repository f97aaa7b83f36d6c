use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use huffcode::{encode, get_codes, CodeTable, FrequencyTable, HuffmanTree};

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. \
    Huffman coding assigns shorter codes to more frequent characters, \
    and no code is a prefix of another. ";

fn corpus() -> String {
    SAMPLE.repeat(200)
}

fn bench_build(c: &mut Criterion) {
    let corpus = corpus();
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Bytes(corpus.len() as u64));

    group.bench_function("frequency_table", |b| {
        b.iter(|| FrequencyTable::from_corpus(&corpus))
    });

    let freqs = FrequencyTable::from_corpus(&corpus);
    group.bench_function("tree", |b| b.iter(|| HuffmanTree::build(&freqs).unwrap()));

    let tree = HuffmanTree::build(&freqs).unwrap();
    group.bench_function("extract_codes", |b| b.iter(|| CodeTable::from_tree(&tree)));

    group.bench_function("get_codes", |b| b.iter(|| get_codes(&corpus).unwrap()));
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let corpus = corpus();
    let codes = get_codes(&corpus).unwrap();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(corpus.len() as u64));

    group.bench_function("in_corpus", |b| b.iter(|| encode(&corpus, &codes)));

    let foreign = corpus.to_uppercase();
    group.bench_function("with_sentinels", |b| b.iter(|| encode(&foreign, &codes)));
    group.finish();
}

criterion_group!(benches, bench_build, bench_encode);
criterion_main!(benches);
