//! # Classic Cipher Library
//!
//! Classical cipher transforms and the statistics needed to break them by hand.
//!
//! ## Supported Ciphers
//!
//! - **Substitution** - monoalphabetic, keyed by a permutation of the alphabet
//! - **Shift** (Caesar) - substitution keyed by a rotated alphabet
//! - **Running key** (Vigenère) - polyalphabetic, one shift per key position
//!
//! ## Analysis
//!
//! - Unigram and bigram frequency tables
//! - Friedman characteristic and index of coincidence
//! - Subtext splitting for a hypothesised key length
//! - Partial substitution for testing letter guesses
//! - Reference letter frequencies (French, German)
//!
//! ## Usage
//!
//! ```rust
//! use classic_cipher::{Alphabet, ClassicalCipher, RunningKey, split_by_key_length,
//!     index_of_coincidence};
//!
//! let latin = Alphabet::latin();
//! let cipher = RunningKey::new("LEMON", &latin)?;
//!
//! let ciphertext = cipher.encrypt("Attack at dawn!");
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//! assert_eq!(cipher.decrypt(&ciphertext), "ATTACKATDAWN");
//!
//! // Attack the ciphertext one key position at a time
//! for subtext in split_by_key_length(&ciphertext, 5)? {
//!     let _ic = index_of_coincidence(&subtext, &latin)?;
//! }
//! # Ok::<(), classic_cipher::CipherError>(())
//! ```
//!
//! All ciphers normalize their input first: accented letters fold to their
//! base letter and anything outside the alphabet is dropped.

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod error;
pub mod frequency;
pub mod reference;
pub mod stats;
pub mod utils;

// Re-exports for easy access
pub use alphabet::{normalize, Alphabet, LATIN};
pub use analysis::{apply_partial_substitution, split_by_key_length};
pub use cipher::{ClassicalCipher, Mode};
pub use ciphers::{running_key, shift, substitute, vigenere, RunningKey, Shift, Substitution};
pub use error::{CipherError, Result};
pub use frequency::{bigram_frequencies, unigram_frequencies, FrequencyTable, Order};
pub use reference::{reference_frequencies, Language};
pub use stats::{friedman_characteristic, index_of_coincidence};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ciphers_behind_trait_object() {
        let latin = Alphabet::latin();
        let ciphers: Vec<Box<dyn ClassicalCipher>> = vec![
            Box::new(Substitution::new("QOLWNXTMGDKBPRSEUVFZHJIYCA", &latin).unwrap()),
            Box::new(Shift::new(3, &latin)),
            Box::new(RunningKey::new("LEMON", &latin).unwrap()),
        ];

        let plaintext = "Il m'a toujours impressionné!";
        for cipher in &ciphers {
            let ciphertext = cipher.apply(plaintext, Mode::Encrypt);
            assert_eq!(ciphertext.chars().count(), normalize(plaintext).chars().count());
            assert_eq!(
                cipher.apply(&ciphertext, Mode::Decrypt),
                "ILMATOUJOURSIMPRESSIONNE"
            );
        }
    }

    #[test]
    fn test_attack_workflow_on_vigenere() {
        let latin = Alphabet::latin();
        let plaintext = normalize(
            "Il était une fois, dans un pays lointain, un vieux meunier qui avait trois fils.",
        );
        let ciphertext = vigenere(&plaintext, "CLE", Mode::Encrypt).unwrap();

        // Every subtext of the true key length is a Caesar shift of the plaintext subtext
        let plain_parts = split_by_key_length(&plaintext, 3).unwrap();
        let cipher_parts = split_by_key_length(&ciphertext, 3).unwrap();
        for ((plain, cipher), key_char) in plain_parts.iter().zip(&cipher_parts).zip("CLE".chars()) {
            let n = latin.index_of(key_char).unwrap() as i64;
            assert_eq!(&shift(plain, n, Mode::Encrypt, &latin), cipher);
            let expected = friedman_characteristic(plain, &latin).unwrap();
            let actual = friedman_characteristic(cipher, &latin).unwrap();
            assert!((expected - actual).abs() < 1e-9);
        }
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
