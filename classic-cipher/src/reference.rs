//! Reference letter frequencies of natural languages
//!
//! Values are percentages in `[0, 100]`, Latin alphabet order.

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, Result};
use crate::frequency::FrequencyTable;

/// French letter frequencies
pub const FRENCH_FREQUENCIES: [(char, f64); 26] = [
    ('A', 8.15), ('B', 0.97), ('C', 3.15), ('D', 3.73), ('E', 17.39),
    ('F', 1.12), ('G', 0.97), ('H', 0.85), ('I', 7.31), ('J', 0.45),
    ('K', 0.02), ('L', 5.69), ('M', 2.87), ('N', 7.12), ('O', 5.28),
    ('P', 2.80), ('Q', 1.21), ('R', 6.64), ('S', 8.14), ('T', 7.22),
    ('U', 6.38), ('V', 1.64), ('W', 0.03), ('X', 0.41), ('Y', 0.28),
    ('Z', 0.15),
];

/// German letter frequencies
pub const GERMAN_FREQUENCIES: [(char, f64); 26] = [
    ('A', 5.58), ('B', 1.96), ('C', 3.16), ('D', 4.98), ('E', 16.93),
    ('F', 1.49), ('G', 3.02), ('H', 4.98), ('I', 8.02), ('J', 0.24),
    ('K', 1.32), ('L', 3.60), ('M', 2.55), ('N', 10.53), ('O', 2.24),
    ('P', 0.67), ('Q', 0.02), ('R', 6.89), ('S', 6.42), ('T', 5.79),
    ('U', 3.83), ('V', 0.84), ('W', 1.78), ('X', 0.05), ('Y', 0.05),
    ('Z', 1.21),
];

/// Languages with a registered reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::French, Language::German];

    pub fn frequencies(self) -> &'static [(char, f64)] {
        match self {
            Language::French => &FRENCH_FREQUENCIES,
            Language::German => &GERMAN_FREQUENCIES,
        }
    }

    /// The reference table as a [`FrequencyTable`].
    pub fn table(self) -> FrequencyTable {
        FrequencyTable::new(
            self.frequencies()
                .iter()
                .map(|&(symbol, frequency)| (symbol.to_string(), frequency))
                .collect(),
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::French => "french",
            Language::German => "german",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "french" | "fr" => Ok(Language::French),
            "german" | "de" => Ok(Language::German),
            _ => Err(CipherError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Reference frequencies for the language called `language`.
///
/// ```rust
/// use classic_cipher::reference_frequencies;
///
/// let french = reference_frequencies("french")?;
/// assert_eq!(french.get("E"), Some(17.39));
/// assert!(reference_frequencies("klingon").is_err());
/// # Ok::<(), classic_cipher::CipherError>(())
/// ```
pub fn reference_frequencies(language: &str) -> Result<FrequencyTable> {
    language.parse::<Language>().map(Language::table)
}
