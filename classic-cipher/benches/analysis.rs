use criterion::{black_box, criterion_group, criterion_main, Criterion};

use classic_cipher::{
    bigram_frequencies, friedman_characteristic, index_of_coincidence, normalize, vigenere,
    Alphabet, Mode,
};

const PARAGRAPH: &str = "En 1815, M. Charles-François-Bienvenu Myriel était évêque de Digne. \
    C'était un vieillard d'environ soixante-quinze ans; il occupait le siège de Digne depuis 1806. \
    Quoique ce détail ne touche en aucune manière au fond même de ce que nous avons à raconter, \
    il n'est peut-être pas inutile, ne fût-ce que pour être exact en tout, d'indiquer ici les bruits \
    et les propos qui avaient couru sur son compte au moment où il était arrivé dans le diocèse.";

fn corpus() -> String {
    normalize(&PARAGRAPH.repeat(200))
}

fn bench_statistics(c: &mut Criterion) {
    let latin = Alphabet::latin();
    let text = corpus();

    c.bench_function("friedman_characteristic", |b| {
        b.iter(|| friedman_characteristic(black_box(&text), &latin))
    });
    c.bench_function("index_of_coincidence", |b| {
        b.iter(|| index_of_coincidence(black_box(&text), &latin))
    });
    c.bench_function("bigram_frequencies", |b| {
        b.iter(|| bigram_frequencies(black_box(&text), &latin))
    });
}

fn bench_ciphers(c: &mut Criterion) {
    let text = corpus();

    c.bench_function("vigenere_encrypt", |b| {
        b.iter(|| vigenere(black_box(&text), "MISERABLES", Mode::Encrypt))
    });
}

criterion_group!(benches, bench_statistics, bench_ciphers);
criterion_main!(benches);
