//! Friedman characteristic and index of coincidence
//!
//! Both statistics are derived from the rounded unigram percentages of
//! [`unigram_frequencies`], not from raw counts.

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::frequency::unigram_frequencies;
use crate::utils::round_to;

/// Sum over the alphabet of `(p - 1/|alphabet|)^2`, rounded to 5 decimals.
///
/// Close to 0 for uniformly distributed text and noticeably larger for
/// natural language. Monoalphabetic substitution only permutes the
/// distribution, so the value survives encryption.
///
/// ```rust
/// use classic_cipher::{friedman_characteristic, Alphabet};
///
/// let latin = Alphabet::latin();
/// assert_eq!(friedman_characteristic("HELLO", &latin)?, 0.24154);
/// assert_eq!(friedman_characteristic("ABCDEFGHIJKLMNOPQRSTUVWXYZ", &latin)?, 0.0);
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
pub fn friedman_characteristic(text: &str, alphabet: &Alphabet) -> Result<f64> {
    let frequencies = unigram_frequencies(text, alphabet)?;
    let uniform = 1.0 / alphabet.len() as f64;

    let characteristic: f64 = frequencies
        .proportions()
        .map(|p| (p - uniform).powi(2))
        .sum();

    Ok(round_to(characteristic, 5))
}

/// Probability that two letters drawn from `text` are equal, rounded to 5
/// decimals.
///
/// Per-symbol counts are reconstructed as `round(p * N)` from the rounded
/// percentage `p`, so on short texts the result can differ slightly from a
/// direct count. Returns `0.0` for texts of fewer than two characters.
pub fn index_of_coincidence(text: &str, alphabet: &Alphabet) -> Result<f64> {
    let n = text.chars().count();
    if n <= 1 {
        return Ok(0.0);
    }

    let frequencies = unigram_frequencies(text, alphabet)?;
    let coincidences: f64 = frequencies
        .proportions()
        .map(|p| (p * n as f64).round_ties_even())
        .map(|count| count * (count - 1.0))
        .sum();

    Ok(round_to(coincidences / (n * (n - 1)) as f64, 5))
}
