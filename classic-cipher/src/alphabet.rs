//! Alphabet definition and text normalization
//!
//! An [`Alphabet`] is the ordered symbol set every cipher and analyzer works
//! over. Symbols are stored uppercased and looked up through a precomputed
//! symbol → position table.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CipherError, Result};

/// The 26 uppercase Latin letters.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of distinct symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from a string of symbols.
    ///
    /// Symbols are uppercased. Fails with `InvalidArgument` if the alphabet is
    /// empty or contains the same symbol twice (after case folding).
    ///
    /// # Example
    ///
    /// ```rust
    /// use classic_cipher::Alphabet;
    ///
    /// let abc = Alphabet::new("abc")?;
    /// assert_eq!(abc.as_string(), "ABC");
    /// assert!(Alphabet::new("ABA").is_err());
    /// # Ok::<(), classic_cipher::CipherError>(())
    /// ```
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().map(upper).collect();
        if symbols.is_empty() {
            return Err(CipherError::InvalidArgument(
                "Alphabet cannot be empty".to_string(),
            ));
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if positions.insert(symbol, i).is_some() {
                return Err(CipherError::InvalidArgument(format!(
                    "Alphabet contains '{}' more than once",
                    symbol
                )));
            }
        }

        Ok(Self { symbols, positions })
    }

    /// The standard 26-letter Latin alphabet.
    pub fn latin() -> Self {
        let symbols: Vec<char> = LATIN.chars().collect();
        let positions = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, positions }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol at `index`, if any.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Position of `c` in the alphabet, matched case-insensitively.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.positions.get(&upper(c)).copied()
    }

    /// Position of `c` in the alphabet, matched exactly against the stored
    /// (uppercase) symbols.
    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }

    /// Reduce a (possibly negative) shift into `[0, len)`.
    pub fn wrap(&self, n: i64) -> usize {
        n.rem_euclid(self.len() as i64) as usize
    }

    /// The alphabet rotated left by `n` positions.
    ///
    /// ```rust
    /// use classic_cipher::Alphabet;
    ///
    /// let latin = Alphabet::latin();
    /// assert_eq!(latin.rotate(3), "DEFGHIJKLMNOPQRSTUVWXYZABC");
    /// assert_eq!(latin.rotate(-1), "ZABCDEFGHIJKLMNOPQRSTUVWXY");
    /// ```
    pub fn rotate(&self, n: i64) -> String {
        let shift = self.wrap(n);
        self.symbols[shift..]
            .iter()
            .chain(self.symbols[..shift].iter())
            .collect()
    }

    /// A random permutation of the alphabet, usable as a substitution key.
    ///
    /// Intended for demonstrations: the shuffle is only as strong as `rng`.
    pub fn random_permutation<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut symbols = self.symbols.clone();
        symbols.shuffle(rng);
        symbols.into_iter().collect()
    }

    /// Every ordered pair of symbols, first symbol varying slowest.
    pub fn digrams(&self) -> Vec<String> {
        let mut digrams = Vec::with_capacity(self.len() * self.len());
        for &a in &self.symbols {
            for &b in &self.symbols {
                digrams.push([a, b].iter().collect());
            }
        }
        digrams
    }

    /// Normalize `text` against this alphabet.
    ///
    /// Symbols of the alphabet pass through uppercased. Other accented Latin
    /// letters fold to their base letter (`œ` expands to `OE`), and anything
    /// left outside the alphabet is dropped.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            if self.contains(c) {
                result.push(upper(c));
            } else if let Some(folded) = fold_accent(c) {
                result.extend(folded.chars().filter(|&f| self.contains(f)));
            }
        }
        result
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

/// Normalize `text` against the Latin alphabet.
///
/// ```rust
/// use classic_cipher::normalize;
///
/// assert_eq!(
///     normalize("Il m'a toujours impressionné![]{}?"),
///     "ILMATOUJOURSIMPRESSIONNE"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    Alphabet::latin().normalize(text)
}

/// Single-character uppercase, leaving characters whose uppercase form
/// is longer than one character (e.g. `ß`) untouched.
fn upper(c: char) -> char {
    let mut chars = c.to_uppercase();
    match (chars.next(), chars.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c.to_lowercase().next().unwrap_or(c) {
        'é' | 'è' | 'ë' | 'ê' => "E",
        'á' | 'à' | 'â' | 'ä' => "A",
        'û' | 'ù' | 'ü' => "U",
        'î' | 'ï' | 'ì' => "I",
        'ö' | 'ô' | 'ò' => "O",
        'ç' => "C",
        'œ' => "OE",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_latin_alphabet() {
        let latin = Alphabet::latin();
        assert_eq!(latin.len(), 26);
        assert_eq!(latin.as_string(), LATIN);
        assert_eq!(latin.index_of('a'), Some(0));
        assert_eq!(latin.index_of('Z'), Some(25));
        assert_eq!(latin.index_of('é'), None);
        assert_eq!(Alphabet::default(), latin);
    }

    #[test]
    fn test_custom_alphabet_rejects_duplicates() {
        assert!(matches!(
            Alphabet::new("ABa"),
            Err(CipherError::InvalidArgument(_))
        ));
        assert!(matches!(
            Alphabet::new(""),
            Err(CipherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rotate() {
        let latin = Alphabet::latin();
        assert_eq!(latin.rotate(0), LATIN);
        assert_eq!(latin.rotate(3), "DEFGHIJKLMNOPQRSTUVWXYZABC");
        assert_eq!(latin.rotate(25), "ZABCDEFGHIJKLMNOPQRSTUVWXY");
        assert_eq!(latin.rotate(29), latin.rotate(3));
        assert_eq!(latin.rotate(-23), latin.rotate(3));
    }

    #[test]
    fn test_digrams() {
        let abc = Alphabet::new("ABC").unwrap();
        assert_eq!(
            abc.digrams(),
            vec!["AA", "AB", "AC", "BA", "BB", "BC", "CA", "CB", "CC"]
        );
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let latin = Alphabet::latin();
        let mut rng = StdRng::seed_from_u64(7);
        let key = latin.random_permutation(&mut rng);

        let mut sorted: Vec<char> = key.chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), LATIN);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("salut"), "SALUT");
        assert_eq!(
            normalize("Il m'a toujours impressionné![]{}?"),
            "ILMATOUJOURSIMPRESSIONNE"
        );
    }

    #[test]
    fn test_normalize_accents() {
        assert_eq!(normalize("Ça été où? Noël, cœur, ÉLÈVE"), "CAETEOUNOELCOEURELEVE");
        assert_eq!(normalize("àâä îïì ûùü öôò"), "AAAIIIUUUOOO");
    }

    #[test]
    fn test_normalize_drops_everything_else() {
        assert_eq!(normalize("123 ß ñ — !"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_accented_alphabet_symbols() {
        let accented = Alphabet::new("ÉA").unwrap();
        assert_eq!(accented.normalize("é"), "É");
        assert_eq!(accented.normalize("Éte à"), "ÉA");
    }

    #[test]
    fn test_position_is_case_sensitive() {
        let latin = Alphabet::latin();
        assert_eq!(latin.position('H'), Some(7));
        assert_eq!(latin.position('h'), None);
        assert_eq!(latin.index_of('h'), Some(7));
    }

    #[test]
    fn test_normalize_custom_alphabet() {
        let abc = Alphabet::new("ABC").unwrap();
        assert_eq!(abc.normalize("a bad cab, à ç"), "ABACABAC");
    }
}
