//! Monoalphabetic substitution

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::cipher::{ClassicalCipher, Mode};
use crate::error::{CipherError, Result};

/// Monoalphabetic substitution keyed by a permutation of the alphabet.
///
/// Encryption replaces the symbol at alphabet position `i` with the key
/// symbol at position `i`; decryption looks the symbol up in the key instead.
#[derive(Debug, Clone)]
pub struct Substitution {
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Substitution {
    /// Create a substitution cipher from `key`
    ///
    /// # Arguments
    ///
    /// * `key` - A permutation of `alphabet` (matched case-insensitively)
    /// * `alphabet` - The plaintext alphabet
    ///
    /// Fails with `InvalidKey` unless every alphabet symbol appears in `key`
    /// exactly once and nothing else does.
    pub fn new(key: &str, alphabet: &Alphabet) -> Result<Self> {
        let len = alphabet.len();
        let key_len = key.chars().count();
        if key_len != len {
            debug!(key_len, alphabet_len = len, "rejecting substitution key");
            return Err(CipherError::InvalidKey(format!(
                "Substitution key has {} symbols, alphabet has {}",
                key_len, len
            )));
        }

        let mut forward = Vec::with_capacity(len);
        let mut seen = vec![false; len];
        for c in key.chars() {
            let index = alphabet.index_of(c).ok_or_else(|| {
                debug!(symbol = %c, "substitution key symbol outside alphabet");
                CipherError::InvalidKey(format!("Key symbol '{}' is not in the alphabet", c))
            })?;
            if seen[index] {
                debug!(symbol = %c, "substitution key repeats a symbol");
                return Err(CipherError::InvalidKey(format!(
                    "Key symbol '{}' appears more than once",
                    c
                )));
            }
            seen[index] = true;
            forward.push(index);
        }

        Ok(Self::from_permutation(alphabet.clone(), forward))
    }

    /// `forward` must be a permutation of `0..alphabet.len()`.
    pub(crate) fn from_permutation(alphabet: Alphabet, forward: Vec<usize>) -> Self {
        let mut inverse = vec![0; forward.len()];
        for (plain, &cipher) in forward.iter().enumerate() {
            inverse[cipher] = plain;
        }
        Self {
            alphabet,
            forward,
            inverse,
        }
    }

    /// The key as a string of alphabet symbols.
    pub fn key(&self) -> String {
        self.forward
            .iter()
            .filter_map(|&i| self.alphabet.symbol(i))
            .collect()
    }

    fn map_with(&self, text: &str, table: &[usize]) -> String {
        self.alphabet
            .normalize(text)
            .chars()
            .filter_map(|c| self.alphabet.index_of(c))
            .filter_map(|i| self.alphabet.symbol(table[i]))
            .collect()
    }
}

impl ClassicalCipher for Substitution {
    fn encrypt(&self, text: &str) -> String {
        self.map_with(text, &self.forward)
    }

    fn decrypt(&self, text: &str) -> String {
        self.map_with(text, &self.inverse)
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Encrypt or decrypt `text` with a substitution `key` over `alphabet`.
///
/// ```rust
/// use classic_cipher::{substitute, Alphabet, Mode};
///
/// let key = "QOLWNXTMGDKBPRSEUVFZHJIYCA";
/// let latin = Alphabet::latin();
/// assert_eq!(substitute("salut", key, Mode::Encrypt, &latin)?, "FQBHZ");
/// assert_eq!(substitute("FQBHZ", key, Mode::Decrypt, &latin)?, "SALUT");
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
pub fn substitute(text: &str, key: &str, mode: Mode, alphabet: &Alphabet) -> Result<String> {
    let cipher = Substitution::new(key, alphabet)?;
    Ok(cipher.apply(text, mode))
}
