//! Generic classical cipher trait

use crate::alphabet::Alphabet;

/// Direction of a cipher transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

/// Trait for a classical cipher over an [`Alphabet`]
///
/// Input is normalized against the cipher's alphabet before it is
/// transformed, so characters outside the alphabet never reach the output
/// and `decrypt(encrypt(t)) == alphabet().normalize(t)`.
pub trait ClassicalCipher {
    /// Encrypts a text
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts a text
    fn decrypt(&self, text: &str) -> String;

    /// Returns the alphabet the cipher operates over
    fn alphabet(&self) -> &Alphabet;

    /// Encrypts or decrypts depending on `mode`
    fn apply(&self, text: &str, mode: Mode) -> String {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }
}
