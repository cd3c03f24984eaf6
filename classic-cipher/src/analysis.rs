//! Helpers for attacking ciphers by hand

use std::collections::HashMap;

use crate::error::{CipherError, Result};

/// Split `ciphertext` into `key_length` subtexts by position modulo
/// `key_length`.
///
/// Under a running-key cipher with a key of that length, each subtext is
/// enciphered with a single shift and can be attacked with frequency analysis.
///
/// ```rust
/// use classic_cipher::split_by_key_length;
///
/// assert_eq!(split_by_key_length("ABCDEFGHIJ", 3)?, vec!["ADGJ", "BEH", "CFI"]);
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
pub fn split_by_key_length(ciphertext: &str, key_length: usize) -> Result<Vec<String>> {
    let len = ciphertext.chars().count();
    if key_length == 0 || key_length > len {
        return Err(CipherError::InvalidArgument(format!(
            "Key length must be between 1 and the text length ({}), got {}",
            len, key_length
        )));
    }

    let mut subtexts = vec![String::new(); key_length];
    for (i, c) in ciphertext.chars().enumerate() {
        subtexts[i % key_length].push(c);
    }

    Ok(subtexts)
}

/// Replace every hinted ciphertext letter with its guessed plaintext letter.
///
/// Replacements are lowercased so they stand out from the letters still to
/// be solved. Each character is looked up in `hints` once, against the
/// original text, so replacements never chain.
///
/// ```rust
/// use std::collections::HashMap;
/// use classic_cipher::apply_partial_substitution;
///
/// let hints = HashMap::from([('M', 'H'), ('B', 'L')]);
/// assert_eq!(apply_partial_substitution("MNBBS", &hints), "hNllS");
/// ```
pub fn apply_partial_substitution(text: &str, hints: &HashMap<char, char>) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match hints.get(&c) {
            Some(plain) => result.extend(plain.to_lowercase()),
            None => result.push(c),
        }
    }
    result
}
