//! Running-key (Vigenère) cipher

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::cipher::{ClassicalCipher, Mode};
use crate::error::{CipherError, Result};

/// Polyalphabetic cipher shifting the symbol at position `i` by the alphabet
/// index of `key[i % key.len()]`.
///
/// Characters outside the alphabet are dropped during normalization and do
/// not consume a key position.
#[derive(Debug, Clone)]
pub struct RunningKey {
    alphabet: Alphabet,
    shifts: Vec<usize>,
}

impl RunningKey {
    /// Create a running-key cipher
    ///
    /// # Arguments
    ///
    /// * `key` - Nonempty key made only of `alphabet` symbols (any case)
    /// * `alphabet` - The alphabet to shift over
    pub fn new(key: &str, alphabet: &Alphabet) -> Result<Self> {
        if key.is_empty() {
            debug!("rejecting empty running key");
            return Err(CipherError::InvalidKey("Key cannot be empty".to_string()));
        }

        let shifts = key
            .chars()
            .enumerate()
            .map(|(i, c)| {
                alphabet.index_of(c).ok_or_else(|| {
                    debug!(symbol = %c, position = i, "running key symbol outside alphabet");
                    CipherError::InvalidKey(format!(
                        "Key contains '{}' at position {} which is not in the alphabet",
                        c, i
                    ))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(Self {
            alphabet: alphabet.clone(),
            shifts,
        })
    }

    /// The key as a string of alphabet symbols.
    pub fn key(&self) -> String {
        self.shifts
            .iter()
            .filter_map(|&i| self.alphabet.symbol(i))
            .collect()
    }

    pub fn key_len(&self) -> usize {
        self.shifts.len()
    }

    fn transform(&self, text: &str, mode: Mode) -> String {
        let len = self.alphabet.len();
        self.alphabet
            .normalize(text)
            .chars()
            .filter_map(|c| self.alphabet.index_of(c))
            .enumerate()
            .filter_map(|(i, index)| {
                let key_shift = self.shifts[i % self.shifts.len()];
                let shifted = match mode {
                    Mode::Encrypt => (index + key_shift) % len,
                    Mode::Decrypt => (index + len - key_shift) % len,
                };
                self.alphabet.symbol(shifted)
            })
            .collect()
    }
}

impl ClassicalCipher for RunningKey {
    fn encrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        self.transform(text, Mode::Decrypt)
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Encrypt or decrypt `text` with a running `key` over `alphabet`.
pub fn running_key(text: &str, key: &str, mode: Mode, alphabet: &Alphabet) -> Result<String> {
    let cipher = RunningKey::new(key, alphabet)?;
    Ok(cipher.apply(text, mode))
}

/// Vigenère cipher: [`running_key`] over the Latin alphabet.
///
/// ```rust
/// use classic_cipher::{vigenere, Mode};
///
/// assert_eq!(vigenere("ATTACKATDAWN", "LEMON", Mode::Encrypt)?, "LXFOPVEFRNHR");
/// assert_eq!(vigenere("LXFOPVEFRNHR", "LEMON", Mode::Decrypt)?, "ATTACKATDAWN");
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String> {
    running_key(text, key, mode, &Alphabet::latin())
}
