//! Shift (Caesar) cipher

use crate::alphabet::Alphabet;
use crate::cipher::{ClassicalCipher, Mode};
use crate::ciphers::Substitution;

/// Caesar cipher: a substitution whose key is the alphabet rotated left by
/// `shift` positions.
#[derive(Debug, Clone)]
pub struct Shift {
    shift: usize,
    inner: Substitution,
}

impl Shift {
    /// Create a shift cipher. `n` is reduced modulo the alphabet length, so
    /// negative shifts rotate right.
    pub fn new(n: i64, alphabet: &Alphabet) -> Self {
        let shift = alphabet.wrap(n);
        let len = alphabet.len();
        let forward = (0..len).map(|i| (i + shift) % len).collect();
        Self {
            shift,
            inner: Substitution::from_permutation(alphabet.clone(), forward),
        }
    }

    /// The effective shift, in `[0, alphabet.len())`.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// The rotated alphabet used as substitution key.
    pub fn key(&self) -> String {
        self.inner.key()
    }
}

impl ClassicalCipher for Shift {
    fn encrypt(&self, text: &str) -> String {
        self.inner.encrypt(text)
    }

    // Decoding with the rotated key is encoding with the key rotated by -n.
    fn decrypt(&self, text: &str) -> String {
        self.inner.decrypt(text)
    }

    fn alphabet(&self) -> &Alphabet {
        self.inner.alphabet()
    }
}

/// Shift every letter of `text` by `n` positions.
///
/// ```rust
/// use classic_cipher::{shift, Alphabet, Mode};
///
/// let latin = Alphabet::latin();
/// assert_eq!(shift("HELLO", 3, Mode::Encrypt, &latin), "KHOOR");
/// assert_eq!(shift("KHOOR", 3, Mode::Decrypt, &latin), "HELLO");
/// ```
pub fn shift(text: &str, n: i64, mode: Mode, alphabet: &Alphabet) -> String {
    Shift::new(n, alphabet).apply(text, mode)
}
