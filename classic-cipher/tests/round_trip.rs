use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use classic_cipher::{
    normalize, running_key, shift, substitute, unigram_frequencies, Alphabet, Mode,
};

/// Characters used to build random texts: letters, accents, punctuation, digits.
const POOL: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'k', 'q', 'w', 'x', 'z', 'A', 'M', 'Q', 'Z', 'é', 'è', 'ê', 'à',
    'ç', 'œ', 'ù', 'ï', 'ô', 'É', ' ', ',', '.', '\'', '!', '?', '-', '0', '7', '\n', 'ß', 'ñ',
];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..200);
    (0..len).map(|_| *POOL.choose(rng).unwrap()).collect()
}

fn random_key(rng: &mut StdRng, alphabet: &Alphabet) -> String {
    let len = rng.gen_range(1..12);
    (0..len)
        .map(|_| *alphabet.symbols().choose(rng).unwrap())
        .collect()
}

#[test]
fn substitution_round_trip() {
    let latin = Alphabet::latin();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let key = latin.random_permutation(&mut rng);
        let text = random_text(&mut rng);

        let ciphertext = substitute(&text, &key, Mode::Encrypt, &latin).unwrap();
        let decrypted = substitute(&ciphertext, &key, Mode::Decrypt, &latin).unwrap();
        assert_eq!(decrypted, normalize(&text), "key {}", key);
    }
}

#[test]
fn shift_round_trip() {
    let latin = Alphabet::latin();
    let mut rng = StdRng::seed_from_u64(26);

    for n in 0..26 {
        let text = random_text(&mut rng);
        let ciphertext = shift(&text, n, Mode::Encrypt, &latin);

        assert_eq!(shift(&ciphertext, n, Mode::Decrypt, &latin), normalize(&text));
        assert_eq!(shift(&ciphertext, -n, Mode::Encrypt, &latin), normalize(&text));
    }
}

#[test]
fn running_key_round_trip() {
    let latin = Alphabet::latin();
    let mut rng = StdRng::seed_from_u64(1553);

    for _ in 0..200 {
        let key = random_key(&mut rng, &latin);
        let text = random_text(&mut rng);

        let ciphertext = running_key(&text, &key, Mode::Encrypt, &latin).unwrap();
        assert_eq!(ciphertext.chars().count(), normalize(&text).chars().count());

        let decrypted = running_key(&ciphertext, &key, Mode::Decrypt, &latin).unwrap();
        assert_eq!(decrypted, normalize(&text), "key {}", key);
    }
}

#[test]
fn round_trip_over_custom_alphabet() {
    let alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789").unwrap();
    let mut rng = StdRng::seed_from_u64(36);

    for _ in 0..50 {
        let key = alphabet.random_permutation(&mut rng);
        let text = random_text(&mut rng);
        let ciphertext = substitute(&text, &key, Mode::Encrypt, &alphabet).unwrap();
        assert_eq!(
            substitute(&ciphertext, &key, Mode::Decrypt, &alphabet).unwrap(),
            alphabet.normalize(&text)
        );
    }
}

#[test]
fn unigram_frequencies_sum_to_hundred_on_normalized_text() {
    let latin = Alphabet::latin();
    let mut rng = StdRng::seed_from_u64(100);

    for _ in 0..100 {
        let text = normalize(&random_text(&mut rng));
        if text.is_empty() {
            continue;
        }
        let total = unigram_frequencies(&text, &latin).unwrap().total();
        // Each of the 26 entries is off by at most 0.005
        assert!((total - 100.0).abs() <= 0.13 + 1e-9, "total was {}", total);
    }
}
