//! Error types for cipher and analysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Text is empty, frequencies are undefined")]
    ZeroLength,

    #[error("Unknown language '{0}' (known languages: french, german)")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
