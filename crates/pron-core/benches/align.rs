use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pron_core::dict::{DictRecord, Transcript};
use pron_core::g2p::{align, align_dictionary, default_mappings, MappingTable};
use pron_core::variants::diff;

fn bench_records() -> Vec<DictRecord> {
    [
        ("dagur", "t a: G Y r"),
        ("hestur", "h E s t Y r"),
        ("leikur", "l ei: k Y r"),
        ("vatns", "v a s"),
        ("amma", "a m a"),
        ("lax", "l a k s"),
        ("kalla", "k a t l a"),
        ("bílskúr", "p i l s k u r"),
        ("félag", "f j E: l a G"),
        ("hnífur", "n_0 i: v Y r"),
    ]
    .iter()
    .map(|&(w, t)| DictRecord::new(w, t))
    .cycle()
    .take(200)
    .collect()
}

fn bench_table(records: &[DictRecord]) -> MappingTable {
    MappingTable::seed(records, 1, default_mappings())
}

static INPUTS: &[(&str, &str, &str)] = &[
    ("short", "dagur", "t a: G Y r"),
    ("medium", "bílskúrshurð", "p i l s k u r s h Y r D"),
    ("skewed", "reykjavíkurvegi", "r ei: c a v i k Y r v ei j I"),
];

fn bench_align(c: &mut Criterion) {
    let records = bench_records();
    let table = bench_table(&records);
    let mut group = c.benchmark_group("g2p/align");
    for &(label, word, transcript) in INPUTS {
        let transcript = Transcript::parse(transcript);
        group.bench_with_input(BenchmarkId::new(label, word.len()), &word, |b, &word| {
            b.iter(|| align(word, &transcript, &table));
        });
    }
    group.finish();
}

fn bench_learn(c: &mut Criterion) {
    let records = bench_records();
    c.bench_function("g2p/learn", |b| {
        b.iter(|| bench_table(&records).extend(&records, 1, default_mappings()));
    });
    let table = bench_table(&records);
    c.bench_function("g2p/align_dictionary", |b| {
        b.iter(|| align_dictionary(&records, &table));
    });
}

fn bench_diff(c: &mut Criterion) {
    let a = Transcript::parse("r ei: k j a v i: k Y r v ei: j I");
    let b = Transcript::parse("r ei: c a v i k Y r v ei j I");
    c.bench_function("variants/diff", |bench| bench.iter(|| diff(&a, &b)));
}

criterion_group!(benches, bench_align, bench_learn, bench_diff);
criterion_main!(benches);
