//! Unigram and bigram frequency analysis
//!
//! Frequencies are percentages rounded to two decimals. Symbols are matched
//! exactly, so lowercase letters are not counted against an uppercase
//! alphabet, while the denominator counts every character of the input.
//! Frequencies therefore only sum to 100 for text that is already normalized.

use std::cmp::Ordering;

use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::utils::round_to;

/// Ordering applied by [`FrequencyTable::sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Descending percentage; ties keep their table order
    Frequency,
    /// Ascending symbol
    Alphabetical,
}

/// Ordered `(symbol, percentage)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, f64)>,
}

impl FrequencyTable {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(s, f)| (s.as_str(), *f))
    }

    /// Percentage recorded for `symbol`, if the table has an entry for it.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|&(_, f)| f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all percentages.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, f)| f).sum()
    }

    /// A re-ordered copy of the table.
    pub fn sorted(&self, order: Order) -> Self {
        let mut entries = self.entries.clone();
        match order {
            Order::Frequency => {
                entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
            }
            Order::Alphabetical => entries.sort_by(|a, b| a.0.cmp(&b.0)),
        }
        Self { entries }
    }

    /// Up to `count` entries starting at `start`, clamped to the table.
    pub fn window(&self, start: usize, count: usize) -> &[(String, f64)] {
        let start = start.min(self.entries.len());
        let end = start.saturating_add(count).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Percentages divided by 100, in table order.
    pub(crate) fn proportions(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, f)| f / 100.0)
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Percentage of each alphabet symbol in `text`, in alphabet order.
///
/// Fails with `ZeroLength` when `text` is empty.
///
/// ```rust
/// use classic_cipher::{unigram_frequencies, Alphabet};
///
/// let table = unigram_frequencies("ABCA", &Alphabet::new("ABC")?)?;
/// assert_eq!(table.entries()[0], ("A".to_string(), 50.0));
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
pub fn unigram_frequencies(text: &str, alphabet: &Alphabet) -> Result<FrequencyTable> {
    let total = text.chars().count();
    if total == 0 {
        return Err(CipherError::ZeroLength);
    }

    let mut counters = vec![0usize; alphabet.len()];
    for c in text.chars() {
        if let Some(index) = alphabet.position(c) {
            counters[index] += 1;
        }
    }
    trace!(total, alphabet_len = alphabet.len(), "computed unigram counts");

    let entries = alphabet
        .symbols()
        .iter()
        .zip(counters)
        .map(|(symbol, count)| {
            let frequency = round_to(count as f64 / total as f64 * 100.0, 2);
            (symbol.to_string(), frequency)
        })
        .collect();

    Ok(FrequencyTable::new(entries))
}

/// Percentage of each ordered symbol pair among the adjacent pairs of `text`.
///
/// The denominator is the number of adjacent pairs, `len - 1`. Text shorter
/// than two characters yields a table of zeros.
pub fn bigram_frequencies(text: &str, alphabet: &Alphabet) -> FrequencyTable {
    let len = alphabet.len();
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len().saturating_sub(1);

    let mut counters = vec![0usize; len * len];
    for pair in chars.windows(2) {
        if let (Some(first), Some(second)) = (alphabet.position(pair[0]), alphabet.position(pair[1])) {
            counters[first * len + second] += 1;
        }
    }
    trace!(total, pairs = len * len, "computed bigram counts");

    let entries = alphabet
        .digrams()
        .into_iter()
        .zip(counters)
        .map(|(digram, count)| {
            let frequency = if total > 0 {
                round_to(count as f64 / total as f64 * 100.0, 2)
            } else {
                0.0
            };
            (digram, frequency)
        })
        .collect();

    FrequencyTable::new(entries)
}
